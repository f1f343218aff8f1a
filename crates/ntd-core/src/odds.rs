//! Exact pairwise odds between dice.
//!
//! For every ordered pair `(i, j)` the full cross-product of faces is
//! enumerated, so the probabilities are exact ratios of counts rather than
//! estimates. The diagonal is computed by the same rule as every other cell,
//! which keeps `win(i, j) + tie(i, j) + win(j, i) == 1` true for all pairs.

use serde::Serialize;

use crate::die::{Die, DieSet};

/// Face-by-face comparison counts for one ordered pair of dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairOutcome {
    /// Face pairs where the first die is strictly greater.
    pub wins: u64,
    /// Face pairs that are equal.
    pub ties: u64,
    /// Face pairs where the first die is strictly smaller.
    pub losses: u64,
    /// Total face pairs compared.
    pub total: u64,
}

impl PairOutcome {
    /// Compare every face of `a` against every face of `b`.
    pub fn between(a: &Die, b: &Die) -> Self {
        let mut wins = 0;
        let mut ties = 0;
        let mut losses = 0;
        for fa in a.faces() {
            for fb in b.faces() {
                match fa.cmp(fb) {
                    std::cmp::Ordering::Greater => wins += 1,
                    std::cmp::Ordering::Equal => ties += 1,
                    std::cmp::Ordering::Less => losses += 1,
                }
            }
        }
        Self {
            wins,
            ties,
            losses,
            total: wins + ties + losses,
        }
    }

    /// Probability that the first die rolls strictly higher.
    pub fn win_probability(&self) -> f64 {
        self.wins as f64 / self.total as f64
    }

    /// Probability that both dice roll the same value.
    pub fn tie_probability(&self) -> f64 {
        self.ties as f64 / self.total as f64
    }

    /// Probability that the first die rolls strictly lower.
    pub fn loss_probability(&self) -> f64 {
        self.losses as f64 / self.total as f64
    }

    /// True when the first die wins more face pairs than it loses.
    pub fn beats(&self) -> bool {
        self.wins > self.losses
    }
}

/// Win and tie probabilities for every ordered pair in a [`DieSet`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityMatrix {
    size: usize,
    outcomes: Vec<PairOutcome>,
}

impl ProbabilityMatrix {
    /// Compute the matrix for a set of dice.
    ///
    /// A [`DieSet`] can only hold non-empty dice, so every cell has a
    /// non-zero total.
    pub fn compute(dice: &DieSet) -> Self {
        let size = dice.len();
        let mut outcomes = Vec::with_capacity(size * size);
        for a in dice {
            for b in dice {
                outcomes.push(PairOutcome::between(a, b));
            }
        }
        Self { size, outcomes }
    }

    /// Number of dice on each axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw counts for the ordered pair. Panics if an index is out of range.
    pub fn outcome(&self, i: usize, j: usize) -> PairOutcome {
        assert!(i < self.size && j < self.size, "die index out of range");
        self.outcomes[i * self.size + j]
    }

    /// Probability that die `i` beats die `j` on a single roll.
    pub fn win(&self, i: usize, j: usize) -> f64 {
        self.outcome(i, j).win_probability()
    }

    /// Probability that dice `i` and `j` roll the same value.
    pub fn tie(&self, i: usize, j: usize) -> f64 {
        self.outcome(i, j).tie_probability()
    }

    /// Rows of win probabilities.
    pub fn win_rows(&self) -> Vec<Vec<f64>> {
        self.rows(PairOutcome::win_probability)
    }

    /// Rows of tie probabilities.
    pub fn tie_rows(&self) -> Vec<Vec<f64>> {
        self.rows(PairOutcome::tie_probability)
    }

    fn rows(&self, f: fn(&PairOutcome) -> f64) -> Vec<Vec<f64>> {
        self.outcomes
            .chunks(self.size)
            .map(|row| row.iter().map(f).collect())
            .collect()
    }

    /// The die other than `against` with the best chance of beating it.
    ///
    /// Ties go to the lowest index. Returns `None` for a single-die set.
    pub fn best_counter(&self, against: usize) -> Option<usize> {
        let mut best: Option<(usize, u64, u64)> = None;
        for candidate in (0..self.size).filter(|&c| c != against) {
            let o = self.outcome(candidate, against);
            // Compare wins/total across candidates without floating point.
            let better = match best {
                None => true,
                Some((_, wins, total)) => o.wins * total > wins * o.total,
            };
            if better {
                best = Some((candidate, o.wins, o.total));
            }
        }
        best.map(|(index, _, _)| index)
    }

    /// True when the "beats" relation contains a cycle, e.g. A > B > C > A.
    pub fn is_non_transitive(&self) -> bool {
        // Depth-first search for a back edge in the beats graph.
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            New,
            Active,
            Done,
        }

        fn visit(m: &ProbabilityMatrix, node: usize, marks: &mut [Mark]) -> bool {
            marks[node] = Mark::Active;
            for next in 0..m.size {
                if next == node || !m.outcome(node, next).beats() {
                    continue;
                }
                let mark = marks[next];
                match mark {
                    Mark::Active => return true,
                    Mark::New if visit(m, next, marks) => return true,
                    _ => {}
                }
            }
            marks[node] = Mark::Done;
            false
        }

        let mut marks = vec![Mark::New; self.size];
        (0..self.size).any(|start| marks[start] == Mark::New && visit(self, start, &mut marks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-12;

    fn set(defs: &[&str]) -> DieSet {
        DieSet::parse(defs).unwrap()
    }

    fn classic() -> DieSet {
        set(&["2,2,4,4,9,9", "1,1,6,6,8,8", "3,3,5,5,7,7"])
    }

    #[test]
    fn known_pair() {
        let m = ProbabilityMatrix::compute(&set(&["2,2,4,4,9,9", "1,1,6,6,8,8"]));
        let o = m.outcome(0, 1);
        assert_eq!((o.wins, o.ties, o.losses, o.total), (20, 0, 16, 36));
        assert!((m.win(0, 1) - 20.0 / 36.0).abs() < EPS);
        assert!((m.win(1, 0) - 16.0 / 36.0).abs() < EPS);
        assert_eq!(m.tie(0, 1), 0.0);
        assert_eq!(format!("{:.4}", m.win(0, 1)), "0.5556");
        assert_eq!(format!("{:.4}", m.win(1, 0)), "0.4444");
    }

    #[test]
    fn constant_die_against_itself() {
        let m = ProbabilityMatrix::compute(&set(&["5,5,5,5,5,5"]));
        assert_eq!(m.tie(0, 0), 1.0);
        assert_eq!(m.win(0, 0), 0.0);
        assert_eq!(m.outcome(0, 0).loss_probability(), 0.0);
    }

    #[test]
    fn diagonal_follows_the_same_rule() {
        let m = ProbabilityMatrix::compute(&set(&["1,2,3,4,5,6"]));
        let o = m.outcome(0, 0);
        assert_eq!((o.wins, o.ties, o.losses), (15, 6, 15));
        assert!((2.0 * m.win(0, 0) + m.tie(0, 0) - 1.0).abs() < EPS);
    }

    #[test]
    fn uneven_face_counts() {
        let m = ProbabilityMatrix::compute(&set(&["1,3", "2"]));
        assert_eq!(m.outcome(0, 1).total, 2);
        assert_eq!(m.win(0, 1), 0.5);
    }

    #[test]
    fn rows_match_cells() {
        let m = ProbabilityMatrix::compute(&classic());
        let wins = m.win_rows();
        let ties = m.tie_rows();
        assert_eq!(wins.len(), 3);
        for (i, (win_row, tie_row)) in wins.iter().zip(&ties).enumerate() {
            assert_eq!(win_row.len(), 3);
            for (j, (w, t)) in win_row.iter().zip(tie_row).enumerate() {
                assert_eq!(*w, m.win(i, j));
                assert_eq!(*t, m.tie(i, j));
            }
        }
    }

    #[test]
    fn classic_set_is_non_transitive() {
        let m = ProbabilityMatrix::compute(&classic());
        assert!(m.outcome(0, 1).beats());
        assert!(m.outcome(1, 2).beats());
        assert!(m.outcome(2, 0).beats());
        assert!(m.is_non_transitive());
    }

    #[test]
    fn cycle_found_behind_a_dominant_die() {
        // The search enters the cycle only by recursing from die 0.
        let m = ProbabilityMatrix::compute(&set(&[
            "10,10,10,10,10,10",
            "2,2,4,4,9,9",
            "1,1,6,6,8,8",
            "3,3,5,5,7,7",
        ]));
        assert!(m.outcome(0, 1).beats());
        assert!(m.is_non_transitive());
    }

    #[test]
    fn ordered_set_is_transitive() {
        let m = ProbabilityMatrix::compute(&set(&["1,1,1", "2,2,2", "3,3,3"]));
        assert!(!m.is_non_transitive());
    }

    #[test]
    fn best_counter_picks_strongest_opponent() {
        let m = ProbabilityMatrix::compute(&classic());
        // 3,3,5,5,7,7 beats 2,2,4,4,9,9 with 20/36.
        assert_eq!(m.best_counter(0), Some(2));
        assert_eq!(m.best_counter(1), Some(0));
        let single = ProbabilityMatrix::compute(&set(&["1,2"]));
        assert_eq!(single.best_counter(0), None);
    }

    #[test]
    fn best_counter_prefers_lowest_index_on_ties() {
        let m = ProbabilityMatrix::compute(&set(&["1", "5", "5"]));
        assert_eq!(m.best_counter(0), Some(1));
    }

    #[test]
    fn serializes_counts() {
        let m = ProbabilityMatrix::compute(&set(&["1", "2"]));
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["size"], 2);
        assert_eq!(json["outcomes"][1]["losses"], 1);
    }

    fn die_strategy() -> impl Strategy<Value = Die> {
        prop::collection::vec(-20i64..20, 1..8).prop_map(|faces| Die::new(faces).unwrap())
    }

    proptest! {
        #[test]
        fn outcomes_are_exhaustive(dice in prop::collection::vec(die_strategy(), 1..6)) {
            let m = ProbabilityMatrix::compute(&DieSet::new(dice).unwrap());
            for i in 0..m.size() {
                for j in 0..m.size() {
                    let sum = m.win(i, j) + m.tie(i, j) + m.win(j, i);
                    prop_assert!((sum - 1.0).abs() < 1e-9);
                    prop_assert_eq!(m.tie(i, j), m.tie(j, i));
                    prop_assert!((0.0..=1.0).contains(&m.win(i, j)));
                }
            }
        }
    }
}

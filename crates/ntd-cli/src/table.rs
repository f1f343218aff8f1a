//! Probability table rendering.

use comfy_table::{ContentArrangement, Table};
use ntd_core::{DieSet, ProbabilityMatrix};

/// Rows are the user's die, columns the computer's. The diagonal shows only
/// the tie probability, since a die against itself has no meaningful winner.
pub fn probability_table(dice: &DieSet, odds: &ProbabilityMatrix) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["User dice v".to_string()];
    header.extend(dice.iter().map(|d| d.to_string()));
    table.set_header(header);

    for (i, die) in dice.iter().enumerate() {
        let mut row = vec![die.to_string()];
        row.extend((0..dice.len()).map(|j| {
            if i == j {
                format!("- ({:.4})", odds.tie(i, j))
            } else {
                format!("{:.4}", odds.win(i, j))
            }
        }));
        table.add_row(row);
    }

    table
}

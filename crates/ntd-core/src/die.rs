//! Dice with arbitrary integer faces, and the set of dice used in a game.
//!
//! Dice are immutable once built. Faces are signed and may repeat; the only
//! structural rule is that a die has at least one face and a set has at
//! least one die. Game-specific rules (face count, minimum number of dice)
//! are checked separately with [`DieSet::validate_for_game`].

use std::str::FromStr;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// A single die: an ordered, non-empty list of faces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Die {
    faces: Vec<i64>,
}

impl Die {
    /// Create a die from its faces.
    pub fn new(faces: Vec<i64>) -> CoreResult<Self> {
        if faces.is_empty() {
            return Err(CoreError::EmptyDie);
        }
        Ok(Self { faces })
    }

    /// Parse a die from its comma form, e.g. `"2,2,4,4,9,9"`.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CoreError::EmptyDie);
        }
        let faces = s
            .split(',')
            .map(|face| {
                let face = face.trim();
                face.parse::<i64>()
                    .map_err(|_| CoreError::InvalidFace(face.to_string()))
            })
            .collect::<CoreResult<Vec<_>>>()?;
        Self::new(faces)
    }

    /// The faces in definition order.
    pub fn faces(&self) -> &[i64] {
        &self.faces
    }

    /// The face at `index`, if any.
    pub fn face(&self, index: usize) -> Option<i64> {
        self.faces.get(index).copied()
    }

    /// Number of faces. Never zero.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

impl FromStr for Die {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(i64::to_string).collect();
        write!(f, "{}", faces.join(","))
    }
}

/// The ordered dice available in a game, indexed from zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DieSet {
    dice: Vec<Die>,
}

impl DieSet {
    /// Create a set from already-built dice.
    pub fn new(dice: Vec<Die>) -> CoreResult<Self> {
        if dice.is_empty() {
            return Err(CoreError::EmptyDieSet);
        }
        Ok(Self { dice })
    }

    /// Parse one die per definition string.
    pub fn parse<S: AsRef<str>>(definitions: &[S]) -> CoreResult<Self> {
        let dice = definitions
            .iter()
            .map(|d| Die::parse(d.as_ref()))
            .collect::<CoreResult<Vec<_>>>()?;
        Self::new(dice)
    }

    /// Check the stricter rules a playable game needs.
    pub fn validate_for_game(&self, min_dice: usize, faces_per_die: usize) -> CoreResult<()> {
        if self.dice.len() < min_dice {
            return Err(CoreError::TooFewDice {
                required: min_dice,
                actual: self.dice.len(),
            });
        }
        for (index, die) in self.dice.iter().enumerate() {
            if die.face_count() != faces_per_die {
                return Err(CoreError::WrongFaceCount {
                    index,
                    die: die.to_string(),
                    required: faces_per_die,
                    actual: die.face_count(),
                });
            }
        }
        Ok(())
    }

    /// The die at `index`.
    pub fn get(&self, index: usize) -> CoreResult<&Die> {
        self.dice.get(index).ok_or(CoreError::NoSuchDie(index))
    }

    /// Number of dice. Never zero.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Iterate over the dice in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Die> {
        self.dice.iter()
    }
}

impl<'a> IntoIterator for &'a DieSet {
    type Item = &'a Die;
    type IntoIter = std::slice::Iter<'a, Die>;

    fn into_iter(self) -> Self::IntoIter {
        self.dice.iter()
    }
}

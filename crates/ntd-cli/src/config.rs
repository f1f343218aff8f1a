//! Game configuration and dice loading.

use std::path::Path;

use ntd_core::{Die, DieSet};

/// Rules a die set must satisfy before a game starts.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Minimum number of dice on the table.
    pub min_dice: usize,
    /// Exact number of faces every die must have.
    pub faces_per_die: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_dice: 3,
            faces_per_die: 6,
        }
    }
}

impl GameConfig {
    /// Set the minimum number of dice (at least 2, so both players get one).
    pub fn with_min_dice(mut self, min_dice: usize) -> Self {
        self.min_dice = min_dice.max(2);
        self
    }

    /// Set the required face count (at least 1).
    pub fn with_faces(mut self, faces: usize) -> Self {
        self.faces_per_die = faces.max(1);
        self
    }

    /// Load dice and check them against the game rules.
    pub fn load_game_dice(&self, args: &[String], file: Option<&Path>) -> Result<DieSet, String> {
        let dice = load_dice(args, file)?;
        dice.validate_for_game(self.min_dice, self.faces_per_die)
            .map_err(|e| e.to_string())?;
        Ok(dice)
    }
}

/// Collect dice from a definitions file (if any) followed by arguments.
///
/// The file holds one die per line; blank lines and `#` comments are skipped.
pub fn load_dice(args: &[String], file: Option<&Path>) -> Result<DieSet, String> {
    let mut definitions = Vec::new();
    if let Some(path) = file {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        definitions.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        );
    }
    definitions.extend(args.iter().cloned());

    if definitions.is_empty() {
        return Err("no dice given. Example: ntd play 2,2,4,4,9,9 6,8,1,1,8,6 7,5,3,7,5,3".into());
    }

    let dice = definitions
        .iter()
        .map(|d| Die::parse(d).map_err(|e| format!("die '{d}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    DieSet::new(dice).map_err(|e| e.to_string())
}

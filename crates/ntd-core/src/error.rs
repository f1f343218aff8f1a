//! Error types for the dice model.

/// Errors raised while building or validating dice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A die was defined without any faces.
    #[error("a die must have at least one face")]
    EmptyDie,

    /// A face could not be parsed as an integer.
    #[error("invalid face value '{0}': expected an integer")]
    InvalidFace(String),

    /// A die set was defined without any dice.
    #[error("at least one die is required")]
    EmptyDieSet,

    /// Fewer dice than the game requires.
    #[error("at least {required} dice are required, got {actual}")]
    TooFewDice {
        /// Minimum number of dice.
        required: usize,
        /// Number of dice supplied.
        actual: usize,
    },

    /// A die has the wrong number of faces for the game.
    #[error("die {index} [{die}] has {actual} faces, each die must have exactly {required}")]
    WrongFaceCount {
        /// Position of the offending die.
        index: usize,
        /// The die, rendered in its comma form.
        die: String,
        /// Required face count.
        required: usize,
        /// Actual face count.
        actual: usize,
    },

    /// A die index outside the set.
    #[error("no die at index {0}")]
    NoSuchDie(usize),
}

/// Convenience result type for dice operations.
pub type CoreResult<T> = Result<T, CoreError>;

use thiserror::Error;

use super::Chips;

#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum ConstraintError {
    #[error("Missing betting attribute `{0}`")]
    MissingAttribute(&'static str),

    #[error("Betting attribute `{name}` is not a whole number of chips: {value:?}")]
    InvalidAttribute { name: &'static str, value: String },

    #[error("The max bet {max_bet} is below the min bet {min_bet}")]
    MaxBelowMin { min_bet: Chips, max_bet: Chips },
}

//! Bet sizing.
//!
//! The pure conversions are free functions: slider percentage to amount,
//! pot portion to amount, and amount back to a slider percentage.
//! [`BettingConstraints`] is the per event snapshot of the table limits they
//! work against, and [`BetSizer`] is the small stateful shim that reads two
//! widgets, runs the conversions and writes the normalized values back.
mod compute;
mod constraints;
mod errors;
mod sync;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use compute::{
    compute_bet_for_slider_percentage, compute_pot_relative_bet, is_all_in, parse_amount,
    percentage_for_amount, sanitize_amount_text, slider_percentage,
    slider_position_for_percentage, Chips,
};
pub use constraints::{
    BettingConstraints, BettingConstraintsBuilder, ConstraintSource, BET_SO_FAR_ATTR,
    CALL_VALUE_ATTR, MAX_ALL_IN_ATTR, MAX_BET_ATTR, MIN_BET_ATTR, POT_SIZE_ATTR,
};
pub use errors::ConstraintError;
pub use sync::{BetSizer, SizingEvent, SizingOutcome};

//! `bet_sizer` is the bet sizing core behind a poker table's raise controls.
//!
//! A table view usually offers three ways of choosing a wager: dragging a
//! range slider, typing an amount, and clicking a quick bet button such as
//! "½ pot". This crate converts between those representations, clamps them
//! to the limits the table imposes, and reports when the chosen amount is an
//! all-in.
//!
//! The crate is split into three parts:
//!
//! - [`sizing`] holds the pure conversions, the constraint snapshot, and the
//!   [`sizing::BetSizer`] that keeps a slider and an amount field in sync.
//! - [`widget`] defines the handles the sizer reads and writes, plus
//!   in-memory versions of them and the bet button label.
//! - [`config`] loads quick bet presets from JSON (feature `serde`).
//!
//! # Example
//!
//! ```
//! use bet_sizer::sizing::{BetSizer, BettingConstraints, SizingEvent};
//! use bet_sizer::widget::{ActionType, AmountInput, MemoryAmount, MemoryButton, MemoryRange};
//!
//! let constraints = BettingConstraints::builder()
//!     .bet_limits(20, 500)
//!     .pot_size(100)
//!     .build()
//!     .unwrap();
//!
//! let mut sizer = BetSizer::new(MemoryRange::new(100), MemoryAmount::default());
//! let mut button = MemoryButton::new(ActionType::Bet);
//!
//! let outcome = sizer.handle(SizingEvent::Preset(0.5), &constraints, &mut button);
//!
//! assert_eq!(outcome.amount, 50);
//! assert_eq!(sizer.amount_input().text(), "50");
//! assert_eq!(button.label(), "Bet 50");
//! ```

/// Bet amount computation and widget synchronization.
pub mod sizing;

/// Widget handles, in-memory widgets and the bet button label.
pub mod widget;

/// Quick bet preset configuration.
#[cfg(feature = "serde")]
pub mod config;

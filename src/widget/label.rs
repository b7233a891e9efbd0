use tracing::trace;

use crate::sizing::{Chips, SizingOutcome};

use super::BetButton;

/// The kind of wager the bet button submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionType {
    /// Opening bet.
    #[default]
    Bet,
    /// Raise over an existing bet.
    Raise,
    /// Everything the player has.
    AllIn,
}

impl ActionType {
    /// Parse the tag a view puts on the button. Unknown tags are bets.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "raise" => ActionType::Raise,
            "all_in" => ActionType::AllIn,
            _ => ActionType::Bet,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            ActionType::Bet => "bet",
            ActionType::Raise => "raise",
            ActionType::AllIn => "all_in",
        }
    }
}

/// The `action-type` and `size` attributes the submit collaborator sends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionPayload {
    pub action_type: ActionType,
    pub size: Chips,
}

/// Relabel the bet button for a sizing outcome and stamp its payload.
///
/// All-ins read `All In {amount}` and submit as [`ActionType::AllIn`].
/// Otherwise the button's own tag picks between `Raise to {amount}` and
/// `Bet {amount}`. The button's tag itself is left alone so the next
/// outcome is rendered from it again.
pub fn render_bet_button<B: BetButton + ?Sized>(button: &mut B, outcome: &SizingOutcome) {
    let base = button.action_type();
    let amount = outcome.amount;

    let (action_type, label) = if outcome.is_all_in {
        (ActionType::AllIn, format!("All In {amount}"))
    } else if base == ActionType::Raise {
        (base, format!("Raise to {amount}"))
    } else {
        // A button tagged all-in that no longer sizes an all-in is a bet.
        (ActionType::Bet, format!("Bet {amount}"))
    };

    trace!(?action_type, amount, %label, "Rendering bet button");
    button.set_label(label);
    button.set_payload(ActionPayload {
        action_type,
        size: amount,
    });
}

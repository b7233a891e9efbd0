//! The handles [`BetSizer`](crate::sizing::BetSizer) reads from and writes
//! to.
//!
//! A host implements these for whatever its UI toolkit gives it (a DOM
//! element, an immediate mode widget id, ...). The in-memory versions here
//! are enough for headless use and for tests.
//!
//! All three traits are implemented for `&mut W` so a host can lend its
//! widgets to the sizer instead of handing them over.
mod label;
mod memory;

pub use label::{render_bet_button, ActionPayload, ActionType};
pub use memory::{MemoryAmount, MemoryButton, MemoryRange};

/// A range control with integer positions from `0` to `max()`.
pub trait RangeInput {
    fn position(&self) -> u32;
    fn set_position(&mut self, position: u32);
    fn max(&self) -> u32;
}

/// The free text field holding the bet amount.
pub trait AmountInput {
    fn text(&self) -> String;
    fn set_text(&mut self, text: String);
}

/// The button that submits the bet.
pub trait BetButton {
    /// The action tag the view put on the button (`"raise"` or a bet).
    fn action_type(&self) -> ActionType;
    fn set_label(&mut self, label: String);
    /// Stamp the outgoing `action-type` and `size` attributes.
    fn set_payload(&mut self, payload: ActionPayload);
}

impl<W: RangeInput + ?Sized> RangeInput for &mut W {
    fn position(&self) -> u32 {
        (**self).position()
    }

    fn set_position(&mut self, position: u32) {
        (**self).set_position(position)
    }

    fn max(&self) -> u32 {
        (**self).max()
    }
}

impl<W: AmountInput + ?Sized> AmountInput for &mut W {
    fn text(&self) -> String {
        (**self).text()
    }

    fn set_text(&mut self, text: String) {
        (**self).set_text(text)
    }
}

impl<W: BetButton + ?Sized> BetButton for &mut W {
    fn action_type(&self) -> ActionType {
        (**self).action_type()
    }

    fn set_label(&mut self, label: String) {
        (**self).set_label(label)
    }

    fn set_payload(&mut self, payload: ActionPayload) {
        (**self).set_payload(payload)
    }
}

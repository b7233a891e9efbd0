use super::{ActionPayload, ActionType, AmountInput, BetButton, RangeInput};

/// A range control that lives in memory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemoryRange {
    position: u32,
    max: u32,
}

impl MemoryRange {
    /// A range with `max` steps, starting at position 0.
    pub fn new(max: u32) -> Self {
        Self { position: 0, max }
    }

    /// Start at `position` instead of 0. Positions past `max` are clamped.
    pub fn with_position(mut self, position: u32) -> Self {
        self.set_position(position);
        self
    }
}

impl RangeInput for MemoryRange {
    fn position(&self) -> u32 {
        self.position
    }

    fn set_position(&mut self, position: u32) {
        // Same as a browser range input, it can't leave its bounds.
        self.position = position.min(self.max);
    }

    fn max(&self) -> u32 {
        self.max
    }
}

/// A text field that lives in memory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MemoryAmount {
    text: String,
    writes: usize,
}

impl MemoryAmount {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            writes: 0,
        }
    }

    /// Simulate the user typing into the field. Not counted as a write.
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// How many times the sizer wrote to the field.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl AmountInput for MemoryAmount {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: String) {
        self.writes += 1;
        self.text = text;
    }
}

/// A bet button that lives in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryButton {
    action_type: ActionType,
    label: String,
    payload: Option<ActionPayload>,
}

impl MemoryButton {
    pub fn new(action_type: ActionType) -> Self {
        Self {
            action_type,
            label: String::new(),
            payload: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The last payload stamped on the button, if any.
    pub fn payload(&self) -> Option<&ActionPayload> {
        self.payload.as_ref()
    }
}

impl BetButton for MemoryButton {
    fn action_type(&self) -> ActionType {
        self.action_type
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }

    fn set_payload(&mut self, payload: ActionPayload) {
        self.payload = Some(payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_clamps_to_max() {
        let mut range = MemoryRange::new(100).with_position(250);
        assert_eq!(range.position(), 100);

        range.set_position(40);
        assert_eq!(range.position(), 40);
    }

    #[test]
    fn test_typing_is_not_a_write() {
        let mut amount = MemoryAmount::new("12");
        amount.type_text("120");
        assert_eq!(amount.text(), "120");
        assert_eq!(amount.writes(), 0);

        amount.set_text("300".to_string());
        assert_eq!(amount.writes(), 1);
    }

    #[test]
    fn test_borrowed_widgets() {
        fn bump<R: RangeInput>(mut range: R) {
            let next = range.position() + 1;
            range.set_position(next);
        }

        let mut range = MemoryRange::new(10);
        bump(&mut range);
        bump(&mut range);
        assert_eq!(range.position(), 2);
    }
}

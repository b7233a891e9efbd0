use tracing::{debug, instrument, trace};

use crate::widget::{render_bet_button, AmountInput, BetButton, RangeInput};

use super::compute::{
    parse_amount, sanitize_amount_text, slider_percentage, slider_position_for_percentage, Chips,
};
use super::constraints::{BettingConstraints, ConstraintSource};

/// What a sizing event settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizingOutcome {
    /// The amount the widgets now show.
    pub amount: Chips,
    /// Whether `amount` is an all-in for the table.
    pub is_all_in: bool,
}

impl SizingOutcome {
    fn new(constraints: &BettingConstraints, amount: Chips) -> Self {
        Self {
            amount,
            is_all_in: constraints.is_all_in(amount),
        }
    }
}

/// The UI events a hosting view forwards to the sizer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum SizingEvent {
    /// The slider moved.
    RangeInput,
    /// A keystroke changed the amount field.
    TextInput,
    /// The amount field lost focus.
    TextBlur,
    /// A quick bet button for this portion of the pot was clicked.
    Preset(f64),
}

/// Keeps a range slider and an amount field showing the same bet.
///
/// The sizer owns no state besides the two widget handles. Every call takes
/// a [`ConstraintSource`] and reads a fresh snapshot from it, runs the
/// conversion for the event, and writes the normalized values back into the
/// widgets.
///
/// After a committed event (slider input, blur, preset click) the amount
/// lies in `[min_bet, max_bet]` and the slider sits at the position that
/// reproduces it. Keystrokes are not committed: the field may drop below the
/// min bet so the user can delete digits while retyping, but it is never
/// left above the max bet.
#[derive(Debug, Clone)]
pub struct BetSizer<R, A> {
    range: R,
    amount: A,
}

impl<R: RangeInput, A: AmountInput> BetSizer<R, A> {
    pub fn new(range: R, amount: A) -> Self {
        Self { range, amount }
    }

    pub fn range(&self) -> &R {
        &self.range
    }

    pub fn amount_input(&self) -> &A {
        &self.amount
    }

    pub fn range_mut(&mut self) -> &mut R {
        &mut self.range
    }

    pub fn amount_input_mut(&mut self) -> &mut A {
        &mut self.amount
    }

    /// Give the widget handles back.
    pub fn into_parts(self) -> (R, A) {
        (self.range, self.amount)
    }

    /// Set the amount from the slider's current position.
    #[instrument(level = "trace", skip(self, source))]
    pub fn slider_to_amount<S: ConstraintSource + ?Sized>(&mut self, source: &S) -> SizingOutcome {
        let constraints = source.snapshot();
        self.write_amount_from_slider(&constraints)
    }

    /// Sanitize the amount field, cap it at the max bet and move the slider
    /// to match.
    #[instrument(level = "trace", skip(self, source))]
    pub fn amount_to_slider<S: ConstraintSource + ?Sized>(&mut self, source: &S) -> SizingOutcome {
        let constraints = source.snapshot();
        self.write_slider_from_amount(&constraints)
    }

    /// The slider was dragged.
    ///
    /// The amount is taken from the slider, then the slider is snapped onto
    /// the position for that amount.
    #[instrument(level = "trace", skip(self, source))]
    pub fn on_range_input<S: ConstraintSource + ?Sized>(&mut self, source: &S) -> SizingOutcome {
        let constraints = source.snapshot();
        self.write_amount_from_slider(&constraints);
        self.write_slider_from_amount(&constraints)
    }

    /// The user typed into the amount field.
    #[instrument(level = "trace", skip(self, source))]
    pub fn on_text_input<S: ConstraintSource + ?Sized>(&mut self, source: &S) -> SizingOutcome {
        let constraints = source.snapshot();
        self.write_slider_from_amount(&constraints)
    }

    /// The amount field lost focus. Whatever was typed is replaced by the
    /// slider's last reconciled amount.
    #[instrument(level = "trace", skip(self, source))]
    pub fn on_text_blur<S: ConstraintSource + ?Sized>(&mut self, source: &S) -> SizingOutcome {
        let constraints = source.snapshot();
        self.write_amount_from_slider(&constraints)
    }

    /// A quick bet button was clicked. `portion` is the fraction of the after
    /// call pot to raise by.
    #[instrument(level = "trace", skip(self, source))]
    pub fn on_preset_click<S: ConstraintSource + ?Sized>(
        &mut self,
        source: &S,
        portion: f64,
    ) -> SizingOutcome {
        let constraints = source.snapshot();
        let amount = constraints.pot_relative_bet(portion);
        trace!(
            amount,
            after_call_pot = constraints.after_call_pot_size(),
            raising_base = constraints.raising_base(),
            "Pot relative bet"
        );

        self.amount.set_text(amount.to_string());
        self.write_slider_from_amount(&constraints)
    }

    /// Run the handler for `event`, then relabel `button` with the outcome.
    #[instrument(level = "trace", skip(self, source, button))]
    pub fn handle<S, B>(&mut self, event: SizingEvent, source: &S, button: &mut B) -> SizingOutcome
    where
        S: ConstraintSource + ?Sized,
        B: BetButton + ?Sized,
    {
        let outcome = match event {
            SizingEvent::RangeInput => self.on_range_input(source),
            SizingEvent::TextInput => self.on_text_input(source),
            SizingEvent::TextBlur => self.on_text_blur(source),
            SizingEvent::Preset(portion) => self.on_preset_click(source, portion),
        };

        render_bet_button(button, &outcome);
        outcome
    }

    fn write_amount_from_slider(&mut self, constraints: &BettingConstraints) -> SizingOutcome {
        let percentage = slider_percentage(self.range.position(), self.range.max());
        let amount = constraints.bet_for_slider_percentage(percentage);

        self.amount.set_text(amount.to_string());

        let outcome = SizingOutcome::new(constraints, amount);
        trace!(percentage, amount, is_all_in = outcome.is_all_in, "Slider to amount");
        outcome
    }

    fn write_slider_from_amount(&mut self, constraints: &BettingConstraints) -> SizingOutcome {
        let raw = self.amount.text();
        let text = sanitize_amount_text(&raw).into_owned();
        if text != raw {
            trace!(%raw, %text, "Stripped non digits from amount");
            self.amount.set_text(text.clone());
        }

        let typed = parse_amount(&text);

        // Only the max is enforced here. The field may sit below the min
        // while the user is retyping.
        let amount = if typed > constraints.max_bet {
            debug!(typed, max_bet = constraints.max_bet, "Capping amount at max bet");
            self.amount.set_text(constraints.max_bet.to_string());
            constraints.max_bet
        } else {
            typed
        };

        let percentage = constraints.percentage_for_amount(amount);
        let position = slider_position_for_percentage(percentage, self.range.max());
        self.range.set_position(position);

        let outcome = SizingOutcome::new(constraints, amount);
        trace!(amount, percentage, position, is_all_in = outcome.is_all_in, "Amount to slider");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use approx::assert_relative_eq;

    use super::*;
    use crate::sizing::test_util::{assert_committed_state, assert_round_trip};
    use crate::widget::{ActionType, MemoryAmount, MemoryButton, MemoryRange};

    const STEPS: u32 = 10_000;

    fn sizer(position: u32, text: &str) -> BetSizer<MemoryRange, MemoryAmount> {
        BetSizer::new(
            MemoryRange::new(STEPS).with_position(position),
            MemoryAmount::new(text),
        )
    }

    fn open_pot() -> BettingConstraints {
        BettingConstraints::builder()
            .bet_limits(20, 500)
            .pot_size(100)
            .build()
            .unwrap()
    }

    fn short_stack() -> BettingConstraints {
        BettingConstraints::builder()
            .bet_limits(20, 300)
            .pot_size(100)
            .max_all_in(true)
            .build()
            .unwrap()
    }

    #[test_log::test]
    fn test_half_pot_preset() {
        let constraints = open_pot();
        let mut sizer = sizer(0, "");

        let outcome = sizer.on_preset_click(&constraints, 0.5);

        assert_eq!(outcome, SizingOutcome { amount: 50, is_all_in: false });
        assert_eq!(sizer.amount_input().text(), "50");

        let percentage = slider_percentage(sizer.range().position(), STEPS);
        assert_relative_eq!(percentage, 0.0625);
        assert_committed_state(&sizer, &constraints, &outcome);
    }

    #[test]
    fn test_empty_text_puts_slider_at_zero() {
        let constraints = open_pot();
        let mut sizer = sizer(5_000, "");

        let outcome = sizer.on_text_input(&constraints);

        assert_eq!(outcome.amount, 0);
        assert!(!outcome.is_all_in);
        assert_eq!(sizer.range().position(), 0);
        // Below the min is allowed while typing, and nothing is written back.
        assert_eq!(sizer.amount_input().text(), "");
        assert_eq!(sizer.amount_input().writes(), 0);
    }

    #[test_log::test]
    fn test_typing_past_max_caps_and_goes_all_in() {
        let constraints = short_stack();
        let mut sizer = sizer(0, "999");
        let mut button = MemoryButton::new(ActionType::Raise);

        let outcome = sizer.handle(SizingEvent::TextInput, &constraints, &mut button);

        assert_eq!(outcome, SizingOutcome { amount: 300, is_all_in: true });
        assert_eq!(sizer.amount_input().text(), "300");
        assert_eq!(sizer.range().position(), STEPS);
        assert_eq!(button.label(), "All In 300");
        assert_eq!(button.payload().unwrap().size, 300);
        assert_eq!(button.payload().unwrap().action_type, ActionType::AllIn);
    }

    #[test]
    fn test_typing_strips_non_digits() {
        let constraints = open_pot();
        let mut sizer = sizer(0, "1,5a0");

        let outcome = sizer.on_text_input(&constraints);

        assert_eq!(outcome.amount, 150);
        assert_eq!(sizer.amount_input().text(), "150");
        assert_eq!(sizer.amount_input().writes(), 1);
    }

    #[test]
    fn test_typing_below_min_is_kept() {
        let constraints = open_pot();
        let mut sizer = sizer(STEPS, "5");

        let outcome = sizer.on_text_input(&constraints);

        assert_eq!(outcome.amount, 5);
        assert_eq!(sizer.amount_input().text(), "5");
        assert_eq!(sizer.range().position(), 0);
    }

    #[test]
    fn test_max_without_max_all_in_is_not_all_in() {
        let constraints = open_pot();
        let mut sizer = sizer(STEPS, "");

        let outcome = sizer.on_range_input(&constraints);

        assert_eq!(outcome, SizingOutcome { amount: 500, is_all_in: false });
    }

    #[test]
    fn test_range_input_writes_amount_and_snaps_slider() {
        let constraints = open_pot();
        let mut sizer = BetSizer::new(MemoryRange::new(100).with_position(37), MemoryAmount::default());

        let outcome = sizer.on_range_input(&constraints);

        // 20 + round(0.37 * 480)
        assert_eq!(outcome.amount, 198);
        assert_eq!(sizer.amount_input().text(), "198");
        assert_eq!(sizer.range().position(), 37);
        assert_committed_state(&sizer, &constraints, &outcome);
    }

    #[test]
    fn test_range_input_at_max_is_all_in() {
        let constraints = short_stack();
        let mut sizer = sizer(STEPS, "");
        let mut button = MemoryButton::new(ActionType::Bet);

        let outcome = sizer.handle(SizingEvent::RangeInput, &constraints, &mut button);

        assert!(outcome.is_all_in);
        assert_eq!(button.label(), "All In 300");
    }

    #[test]
    fn test_blur_restores_slider_amount() {
        let constraints = open_pot();
        let mut sizer = sizer(STEPS / 2, "260");
        let mut button = MemoryButton::new(ActionType::Bet);

        // The user deletes everything and wanders off.
        sizer.amount_input_mut().type_text("");
        sizer.handle(SizingEvent::TextInput, &constraints, &mut button);
        assert_eq!(sizer.range().position(), 0);

        let outcome = sizer.handle(SizingEvent::TextBlur, &constraints, &mut button);

        assert_eq!(outcome.amount, 20);
        assert_eq!(sizer.amount_input().text(), "20");
        assert_eq!(button.label(), "Bet 20");
        assert_committed_state(&sizer, &constraints, &outcome);
    }

    #[test]
    fn test_blur_after_typing_keeps_reconciled_amount() {
        let constraints = open_pot();
        let mut sizer = sizer(0, "");

        sizer.amount_input_mut().type_text("260");
        sizer.on_text_input(&constraints);
        let outcome = sizer.on_text_blur(&constraints);

        assert_eq!(outcome.amount, 260);
        assert_eq!(sizer.amount_input().text(), "260");
    }

    #[test]
    fn test_preset_raise_uses_raising_base() {
        let constraints = BettingConstraints::builder()
            .bet_limits(80, 1000)
            .call_value(40)
            .bet_so_far(10)
            .pot_size(100)
            .build()
            .unwrap();
        let mut sizer = sizer(0, "");
        let mut button = MemoryButton::new(ActionType::Raise);

        let outcome = sizer.handle(SizingEvent::Preset(1.0), &constraints, &mut button);

        assert_eq!(outcome.amount, 190);
        assert_eq!(button.label(), "Raise to 190");
        assert_committed_state(&sizer, &constraints, &outcome);
    }

    #[test]
    fn test_oversized_preset_clamps_to_all_in() {
        let constraints = short_stack();
        let mut sizer = sizer(0, "");

        let outcome = sizer.on_preset_click(&constraints, 5.0);

        assert_eq!(outcome, SizingOutcome { amount: 300, is_all_in: true });
        assert_eq!(sizer.range().position(), STEPS);
    }

    #[test]
    fn test_tiny_preset_clamps_to_min() {
        let constraints = open_pot();
        let mut sizer = sizer(STEPS, "");

        let outcome = sizer.on_preset_click(&constraints, 0.1);

        assert_eq!(outcome.amount, 20);
        assert_eq!(sizer.range().position(), 0);
    }

    #[test]
    fn test_constraints_are_read_on_every_call() {
        let max_bet = Cell::new(500);
        let source = || BettingConstraints {
            min_bet: 20,
            max_bet: max_bet.get(),
            pot_size: 100,
            max_all_in: true,
            ..Default::default()
        };
        let mut sizer = sizer(STEPS, "");

        assert_eq!(sizer.on_range_input(&source).amount, 500);

        // Someone else bet and our stack shrank.
        max_bet.set(260);
        let outcome = sizer.on_range_input(&source);
        assert_eq!(outcome, SizingOutcome { amount: 260, is_all_in: true });
    }

    #[test]
    fn test_events_are_idempotent() {
        let constraints = short_stack();
        let events = [
            SizingEvent::RangeInput,
            SizingEvent::TextInput,
            SizingEvent::TextBlur,
            SizingEvent::Preset(0.75),
        ];

        for event in events {
            let mut sizer = sizer(4_321, "123");
            let mut button = MemoryButton::new(ActionType::Bet);

            let first = sizer.handle(event, &constraints, &mut button);
            let state = (sizer.range().clone(), sizer.amount_input().text());
            let second = sizer.handle(event, &constraints, &mut button);

            assert_eq!(first, second, "{event:?}");
            assert_eq!(state.0, *sizer.range(), "{event:?}");
            assert_eq!(state.1, sizer.amount_input().text(), "{event:?}");
        }
    }

    #[test]
    fn test_borrowed_widgets() {
        let constraints = open_pot();
        let mut range = MemoryRange::new(100);
        let mut amount = MemoryAmount::new("250");

        {
            let mut sizer = BetSizer::new(&mut range, &mut amount);
            sizer.on_text_input(&constraints);
        }

        // (250 - 20) / 480 * 100 = 47.9
        assert_eq!(range.position(), 48);
        assert_eq!(amount.text(), "250");
    }

    #[test]
    fn test_degenerate_limits() {
        let constraints = BettingConstraints::builder()
            .bet_limits(300, 300)
            .max_all_in(true)
            .build()
            .unwrap();
        let mut sizer = sizer(0, "");

        let outcome = sizer.on_range_input(&constraints);

        assert_eq!(outcome, SizingOutcome { amount: 300, is_all_in: true });
        assert_eq!(sizer.range().position(), STEPS);
        assert_committed_state(&sizer, &constraints, &outcome);
    }

    #[test]
    fn test_committed_events_round_trip() {
        let constraints = open_pot();
        for amount in (constraints.min_bet..=constraints.max_bet).step_by(7) {
            assert_round_trip(&constraints, amount);

            let mut sizer = sizer(0, &amount.to_string());
            sizer.on_text_input(&constraints);
            let outcome = sizer.on_text_blur(&constraints);
            assert_committed_state(&sizer, &constraints, &outcome);

            assert!(
                outcome.amount.abs_diff(amount) <= 1,
                "typed {amount}, blur settled on {}",
                outcome.amount
            );
        }
    }
}

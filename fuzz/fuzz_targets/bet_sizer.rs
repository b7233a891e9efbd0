#![no_main]

extern crate arbitrary;
extern crate bet_sizer;
extern crate libfuzzer_sys;

use bet_sizer::sizing::{
    test_util::{assert_committed_state, assert_round_trip},
    BetSizer, BettingConstraints, SizingEvent,
};
use bet_sizer::widget::{ActionType, MemoryAmount, MemoryButton, MemoryRange};

use libfuzzer_sys::fuzz_target;

const MAX_CHIPS: u64 = 1 << 40;

/// One step of user input: optionally type something, then fire an event.
#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Step {
    pub typed: Option<String>,
    pub event: SizingEvent,
}

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct SizerInput {
    pub constraints: BettingConstraints,
    pub slider_steps: u16,
    pub start_position: u16,
    pub raise: bool,
    pub steps: Vec<Step>,
}

fuzz_target!(|input: SizerInput| {
    let mut constraints = input.constraints;

    // Keep the snapshot valid and the amounts in a range where f64 is exact.
    constraints.min_bet %= MAX_CHIPS;
    constraints.max_bet %= MAX_CHIPS;
    if constraints.max_bet < constraints.min_bet {
        std::mem::swap(&mut constraints.min_bet, &mut constraints.max_bet);
    }
    constraints.pot_size %= MAX_CHIPS;
    constraints.call_value %= MAX_CHIPS;
    constraints.bet_so_far %= MAX_CHIPS;

    let slider_steps = u32::from(input.slider_steps).max(1);
    let mut sizer = BetSizer::new(
        MemoryRange::new(slider_steps).with_position(u32::from(input.start_position)),
        MemoryAmount::default(),
    );
    let action_type = if input.raise {
        ActionType::Raise
    } else {
        ActionType::Bet
    };
    let mut button = MemoryButton::new(action_type);

    for step in input.steps {
        if let Some(typed) = step.typed {
            sizer.amount_input_mut().type_text(typed);
        }

        let event = match step.event {
            SizingEvent::Preset(portion) if !portion.is_finite() => continue,
            event => event,
        };

        let outcome = sizer.handle(event, &constraints, &mut button);

        assert!(outcome.amount <= constraints.max_bet);
        assert_eq!(button.payload().map(|p| p.size), Some(outcome.amount));
        assert_eq!(button.label().starts_with("All In"), outcome.is_all_in);

        if event != SizingEvent::TextInput {
            assert_committed_state(&sizer, &constraints, &outcome);
            assert_round_trip(&constraints, outcome.amount);
        }
    }
});

use approx::assert_abs_diff_eq;

use crate::widget::{AmountInput, RangeInput};

use super::compute::{
    compute_bet_for_slider_percentage, percentage_for_amount, slider_percentage,
    slider_position_for_percentage, Chips,
};
use super::{BetSizer, BettingConstraints, SizingOutcome};

/// Check the widgets after a committed event (slider input, blur, preset
/// click).
///
/// - The amount is inside the table limits.
/// - The field shows exactly that amount.
/// - The slider position maps back onto the amount, give or take the
///   slider's step size and one chip of rounding.
/// - The all-in flag matches the table rule.
pub fn assert_committed_state<R: RangeInput, A: AmountInput>(
    sizer: &BetSizer<R, A>,
    constraints: &BettingConstraints,
    outcome: &SizingOutcome,
) {
    let amount = outcome.amount;

    assert!(
        (constraints.min_bet..=constraints.max_bet).contains(&amount),
        "Committed amount {amount} outside [{}, {}]",
        constraints.min_bet,
        constraints.max_bet
    );

    assert_eq!(
        sizer.amount_input().text(),
        amount.to_string(),
        "Amount field doesn't show the committed amount"
    );

    let range = sizer.range();
    let slider_amount = compute_bet_for_slider_percentage(
        constraints.min_bet,
        constraints.max_bet,
        slider_percentage(range.position(), range.max()),
    );
    let span = constraints.max_bet - constraints.min_bet;
    let epsilon = if range.max() == 0 {
        span as f64
    } else {
        span as f64 / (2.0 * f64::from(range.max())) + 1.0
    };
    assert_abs_diff_eq!(slider_amount as f64, amount as f64, epsilon = epsilon);

    assert_eq!(
        outcome.is_all_in,
        constraints.max_all_in && amount == constraints.max_bet,
        "All-in flag is wrong for {amount}"
    );
}

/// Converting `amount` to a slider percentage and back moves it by at most
/// one chip, both with a continuous slider and with one of `max_bet -
/// min_bet` steps.
pub fn assert_round_trip(constraints: &BettingConstraints, amount: Chips) {
    let (min_bet, max_bet) = (constraints.min_bet, constraints.max_bet);

    let percentage = percentage_for_amount(min_bet, max_bet, amount);
    let back = compute_bet_for_slider_percentage(min_bet, max_bet, percentage);
    assert!(
        back.abs_diff(amount) <= 1,
        "{amount} -> {percentage} -> {back}"
    );

    // A slider with one step per chip can't lose anything to quantization.
    if let Ok(steps) = u32::try_from(max_bet - min_bet) {
        if steps > 0 {
            let position = slider_position_for_percentage(percentage, steps);
            let back = compute_bet_for_slider_percentage(
                min_bet,
                max_bet,
                slider_percentage(position, steps),
            );
            assert!(
                back.abs_diff(amount) <= 1,
                "{amount} -> position {position}/{steps} -> {back}"
            );
        }
    }
}

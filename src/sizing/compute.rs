use std::borrow::Cow;

/// Chip amounts are whole numbers.
pub type Chips = u64;

/// Round a non-negative product to the nearest chip.
///
/// Halves round up. NaN and anything below zero become 0, values past
/// `Chips::MAX` saturate.
fn round_chips(value: f64) -> Chips {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        // `as` saturates for floats that don't fit
        (value + 0.5).floor() as Chips
    }
}

/// Map a slider percentage in `[0.0, 1.0]` linearly onto `[min_bet, max_bet]`.
///
/// The caller guarantees the percentage range so there is no clamping.
///
/// ```
/// use bet_sizer::sizing::compute_bet_for_slider_percentage;
///
/// assert_eq!(compute_bet_for_slider_percentage(20, 500, 0.0), 20);
/// assert_eq!(compute_bet_for_slider_percentage(20, 500, 0.5), 260);
/// assert_eq!(compute_bet_for_slider_percentage(20, 500, 1.0), 500);
/// ```
pub fn compute_bet_for_slider_percentage(min_bet: Chips, max_bet: Chips, percentage: f64) -> Chips {
    let span = max_bet.saturating_sub(min_bet);
    min_bet.saturating_add(round_chips(percentage * span as f64))
}

/// Size a bet as a portion of the pot.
///
/// `after_call_pot_size` is the pot as it would be after the player calls and
/// `raising_base` is what the player has already put in plus the call. The
/// pot portion is layered on top of the raising base and the result is always
/// clamped to `[min_bet, max_bet]`, whatever the portion.
///
/// ```
/// use bet_sizer::sizing::compute_pot_relative_bet;
///
/// // Half pot on an unopened 100 chip pot.
/// assert_eq!(compute_pot_relative_bet(20, 500, 100, 0, 0.5), 50);
/// // Ten times pot is capped by the table.
/// assert_eq!(compute_pot_relative_bet(20, 500, 100, 0, 10.0), 500);
/// ```
pub fn compute_pot_relative_bet(
    min_bet: Chips,
    max_bet: Chips,
    after_call_pot_size: Chips,
    raising_base: Chips,
    percentage: f64,
) -> Chips {
    let bet = raising_base.saturating_add(round_chips(after_call_pot_size as f64 * percentage));

    if bet < min_bet {
        min_bet
    } else if bet > max_bet {
        max_bet
    } else {
        bet
    }
}

/// Inverse of [`compute_bet_for_slider_percentage`].
///
/// Amounts below `min_bet` floor at `0.0`. The upper side is not clamped:
/// an amount above `max_bet` gives a percentage above `1.0`, callers clamp
/// the amount first.
///
/// When `min_bet == max_bet` there is nothing to interpolate; the result is
/// `1.0` once the amount reaches `max_bet` and `0.0` below it.
pub fn percentage_for_amount(min_bet: Chips, max_bet: Chips, amount: Chips) -> f64 {
    if max_bet <= min_bet {
        return if amount >= max_bet { 1.0 } else { 0.0 };
    }

    let span = (max_bet - min_bet) as f64;
    ((amount as f64 - min_bet as f64) / span).max(0.0)
}

/// Strip everything that isn't an ASCII digit.
///
/// Borrows when the text is already clean so callers can tell whether a
/// write back is needed.
pub fn sanitize_amount_text(text: &str) -> Cow<'_, str> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(char::is_ascii_digit).collect())
    }
}

/// Parse sanitized amount text.
///
/// The empty string is 0, so is any text without digits. Non digit
/// characters are skipped. Values too large for [`Chips`] saturate.
pub fn parse_amount(text: &str) -> Chips {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0, |acc: Chips, digit| {
            acc.saturating_mul(10).saturating_add(Chips::from(digit - b'0'))
        })
}

/// An amount is an all-in when the table says max bets are all-ins and the
/// amount is exactly the max.
pub fn is_all_in(max_all_in: bool, max_bet: Chips, amount: Chips) -> bool {
    max_all_in && amount == max_bet
}

/// Read a range control's integer position as a percentage.
///
/// A control with a zero `slider_max` always reads as `0.0`.
pub fn slider_percentage(position: u32, slider_max: u32) -> f64 {
    if slider_max == 0 {
        0.0
    } else {
        f64::from(position) / f64::from(slider_max)
    }
}

/// Nearest integer position for a percentage on a range control with
/// `slider_max` steps. Positions are clamped to `[0, slider_max]`.
pub fn slider_position_for_percentage(percentage: f64, slider_max: u32) -> u32 {
    let position = round_chips(percentage * f64::from(slider_max));
    position.min(Chips::from(slider_max)) as u32
}

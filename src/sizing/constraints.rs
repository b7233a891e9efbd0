use super::compute::{self, Chips};
use super::errors::ConstraintError;

/// Data attribute names a bet widget carries its limits in.
pub const MIN_BET_ATTR: &str = "min-bet";
pub const MAX_BET_ATTR: &str = "max-bet";
pub const CALL_VALUE_ATTR: &str = "call-value";
pub const BET_SO_FAR_ATTR: &str = "bet-so-far";
pub const POT_SIZE_ATTR: &str = "pot-size";
pub const MAX_ALL_IN_ATTR: &str = "max-all-in";

/// The table imposed limits for one sizing interaction.
///
/// A snapshot is read fresh on every call, the table may change between
/// events. The computation assumes a valid snapshot (`min_bet <= max_bet`);
/// use [`BettingConstraints::builder`] or [`BettingConstraints::validate`]
/// when the values come from somewhere untrusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct BettingConstraints {
    /// Smallest legal wager.
    pub min_bet: Chips,
    /// Largest legal wager.
    pub max_bet: Chips,
    /// What it costs the player to call.
    pub call_value: Chips,
    /// What the player has already put in this round.
    pub bet_so_far: Chips,
    /// Chips in the pot.
    pub pot_size: Chips,
    /// Whether a max bet puts the player all-in.
    pub max_all_in: bool,
}

impl BettingConstraints {
    pub fn builder() -> BettingConstraintsBuilder {
        BettingConstraintsBuilder::default()
    }

    /// The pot as it would be after the player calls.
    pub fn after_call_pot_size(&self) -> Chips {
        self.pot_size.saturating_add(self.call_value)
    }

    /// The player's committed chips plus the call. Pot relative raises are
    /// layered on top of this.
    pub fn raising_base(&self) -> Chips {
        self.bet_so_far.saturating_add(self.call_value)
    }

    /// Clamp an amount into `[min_bet, max_bet]`.
    pub fn clamp(&self, amount: Chips) -> Chips {
        amount.max(self.min_bet).min(self.max_bet)
    }

    pub fn is_all_in(&self, amount: Chips) -> bool {
        compute::is_all_in(self.max_all_in, self.max_bet, amount)
    }

    pub fn bet_for_slider_percentage(&self, percentage: f64) -> Chips {
        compute::compute_bet_for_slider_percentage(self.min_bet, self.max_bet, percentage)
    }

    pub fn percentage_for_amount(&self, amount: Chips) -> f64 {
        compute::percentage_for_amount(self.min_bet, self.max_bet, amount)
    }

    /// Size a quick bet as `portion` of the after call pot.
    pub fn pot_relative_bet(&self, portion: f64) -> Chips {
        compute::compute_pot_relative_bet(
            self.min_bet,
            self.max_bet,
            self.after_call_pot_size(),
            self.raising_base(),
            portion,
        )
    }

    pub fn validate(&self) -> Result<(), ConstraintError> {
        if self.max_bet < self.min_bet {
            return Err(ConstraintError::MaxBelowMin {
                min_bet: self.min_bet,
                max_bet: self.max_bet,
            });
        }
        Ok(())
    }

    /// Read a snapshot from a widget's data attributes.
    ///
    /// `lookup` is given the attribute name without the `data-` prefix
    /// (`min-bet`, `max-bet`, `call-value`, `bet-so-far`, `pot-size`,
    /// `max-all-in`). The numeric ones are required. `max-all-in` is true
    /// only for the exact text `"true"`, missing means false.
    ///
    /// ```
    /// use bet_sizer::sizing::BettingConstraints;
    ///
    /// let attrs = [
    ///     ("min-bet", "20"),
    ///     ("max-bet", "300"),
    ///     ("call-value", "0"),
    ///     ("bet-so-far", "0"),
    ///     ("pot-size", "45"),
    ///     ("max-all-in", "true"),
    /// ];
    /// let constraints = BettingConstraints::from_data_attributes(|name| {
    ///     attrs.iter().find(|(k, _)| *k == name).map(|(_, v)| v.to_string())
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(constraints.max_bet, 300);
    /// assert!(constraints.max_all_in);
    /// ```
    pub fn from_data_attributes<F>(lookup: F) -> Result<Self, ConstraintError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let chips = |name: &'static str| -> Result<Chips, ConstraintError> {
            let value = lookup(name).ok_or(ConstraintError::MissingAttribute(name))?;
            value
                .trim()
                .parse::<Chips>()
                .map_err(|_| ConstraintError::InvalidAttribute { name, value })
        };

        BettingConstraintsBuilder::default()
            .bet_limits(chips(MIN_BET_ATTR)?, chips(MAX_BET_ATTR)?)
            .call_value(chips(CALL_VALUE_ATTR)?)
            .bet_so_far(chips(BET_SO_FAR_ATTR)?)
            .pot_size(chips(POT_SIZE_ATTR)?)
            .max_all_in(lookup(MAX_ALL_IN_ATTR).as_deref() == Some("true"))
            .build()
    }
}

/// Builder for [`BettingConstraints`]. Every field defaults to zero/false;
/// `build` rejects a max bet below the min bet.
#[derive(Debug, Clone, Default)]
pub struct BettingConstraintsBuilder {
    constraints: BettingConstraints,
}

impl BettingConstraintsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_bet(mut self, min_bet: Chips) -> Self {
        self.constraints.min_bet = min_bet;
        self
    }

    pub fn max_bet(mut self, max_bet: Chips) -> Self {
        self.constraints.max_bet = max_bet;
        self
    }

    /// Convenience method to set both the min and max bet at once.
    pub fn bet_limits(mut self, min_bet: Chips, max_bet: Chips) -> Self {
        self.constraints.min_bet = min_bet;
        self.constraints.max_bet = max_bet;
        self
    }

    pub fn call_value(mut self, call_value: Chips) -> Self {
        self.constraints.call_value = call_value;
        self
    }

    pub fn bet_so_far(mut self, bet_so_far: Chips) -> Self {
        self.constraints.bet_so_far = bet_so_far;
        self
    }

    pub fn pot_size(mut self, pot_size: Chips) -> Self {
        self.constraints.pot_size = pot_size;
        self
    }

    pub fn max_all_in(mut self, max_all_in: bool) -> Self {
        self.constraints.max_all_in = max_all_in;
        self
    }

    pub fn build(self) -> Result<BettingConstraints, ConstraintError> {
        self.constraints.validate()?;
        Ok(self.constraints)
    }
}

/// Anything the sizer can read a fresh constraint snapshot from.
pub trait ConstraintSource {
    fn snapshot(&self) -> BettingConstraints;
}

impl ConstraintSource for BettingConstraints {
    fn snapshot(&self) -> BettingConstraints {
        *self
    }
}

impl<F> ConstraintSource for F
where
    F: Fn() -> BettingConstraints,
{
    fn snapshot(&self) -> BettingConstraints {
        self()
    }
}

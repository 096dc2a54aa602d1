//! View state for the calculator screen.
//!
//! Everything the window shows is derived from [`TipScreen`]; the gpui view
//! only copies widget values in and labels out, so the screen's behavior
//! can be exercised without a window.

use std::fmt;

use tip_core::{CurrencyFormat, TipLabels, TipRequest, TipTier, calculate, parse_optional_cost};
use tracing::debug;

/// Raw values held by the input widgets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TipFormModel {
    pub cost_text: String,
    pub tier: Option<TipTier>,
    pub round_up: bool,
}

impl TipFormModel {
    pub fn new(
        tier: Option<TipTier>,
        round_up: bool,
    ) -> Self {
        Self {
            cost_text: String::new(),
            tier,
            round_up,
        }
    }

    /// Takes one snapshot of the inputs, parsing the cost field exactly once.
    pub fn to_request(&self) -> TipRequest {
        TipRequest::new(parse_optional_cost(&self.cost_text), self.tier, self.round_up)
    }
}

impl fmt::Display for TipFormModel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Cost of service: {:?}", self.cost_text)?;
        writeln!(
            f,
            "Tip tier:        {}",
            self.tier.map_or("none", |t| t.label())
        )?;
        write!(f, "Round up:        {}", self.round_up)
    }
}

/// Which labels the screen is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScreenState {
    /// Nothing calculated yet; both labels are blank.
    #[default]
    Idle,
    /// Labels reflect the most recent calculation.
    Computed(TipLabels),
}

/// Keys delivered to the cost field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPress {
    Enter,
    Other,
}

impl KeyPress {
    /// Classifies a gpui keystroke name (`"enter"`, `"a"`, ...).
    pub fn from_key_name(key: &str) -> Self {
        if key.eq_ignore_ascii_case("enter") || key.eq_ignore_ascii_case("return") {
            Self::Enter
        } else {
            Self::Other
        }
    }
}

/// Result of offering a key to the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyHandling {
    /// The key was consumed; the keyboard (input focus) should be dismissed.
    Handled,
    /// The key falls through to default processing.
    Unhandled,
}

impl KeyHandling {
    pub fn dismisses_keyboard(&self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// The calculator screen: inputs, current state and the locale's currency format.
#[derive(Clone, Debug)]
pub struct TipScreen {
    form: TipFormModel,
    state: ScreenState,
    format: CurrencyFormat,
}

impl TipScreen {
    pub fn new(
        form: TipFormModel,
        format: CurrencyFormat,
    ) -> Self {
        Self {
            form,
            state: ScreenState::Idle,
            format,
        }
    }

    pub fn form(&self) -> &TipFormModel {
        &self.form
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn set_cost_text(
        &mut self,
        text: impl Into<String>,
    ) {
        self.form.cost_text = text.into();
    }

    pub fn select_tier(
        &mut self,
        tier: Option<TipTier>,
    ) {
        self.form.tier = tier;
    }

    pub fn set_round_up(
        &mut self,
        round_up: bool,
    ) {
        self.form.round_up = round_up;
    }

    /// Runs the calculation on the current inputs and enters [`ScreenState::Computed`].
    pub fn calculate(&mut self) -> TipLabels {
        let request = self.form.to_request();
        let breakdown = calculate(&request);
        debug!(%breakdown, "calculated tip");

        let labels = TipLabels::new(&self.format, &breakdown);
        self.state = ScreenState::Computed(labels.clone());
        labels
    }

    /// Offers a key event from the cost field to the screen.
    pub fn handle_key(
        &self,
        key: KeyPress,
    ) -> KeyHandling {
        match key {
            KeyPress::Enter => KeyHandling::Handled,
            KeyPress::Other => KeyHandling::Unhandled,
        }
    }

    pub fn tip_label(&self) -> &str {
        match &self.state {
            ScreenState::Computed(labels) => &labels.tip,
            ScreenState::Idle => "",
        }
    }

    pub fn total_label(&self) -> &str {
        match &self.state {
            ScreenState::Computed(labels) => &labels.total,
            ScreenState::Idle => "",
        }
    }
}

//! Headless mode: run one calculation without opening a window.

use tip_core::{CurrencyFormat, TipLabels, TipTier};
use tracing::debug;

use crate::models::{TipFormModel, TipScreen};

/// Inputs for a single headless calculation, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessRequest {
    pub cost_text: String,
    pub tier: Option<TipTier>,
    pub round_up: bool,
}

/// Drives the same [`TipScreen`] the window uses and returns its labels.
pub fn run_headless(
    request: &HeadlessRequest,
    format: CurrencyFormat,
) -> TipLabels {
    let mut screen = TipScreen::new(TipFormModel::new(request.tier, request.round_up), format);
    screen.set_cost_text(request.cost_text.as_str());
    debug!(form = %screen.form(), "running headless calculation");
    screen.calculate()
}

use gpui::{
    AppContext, ClickEvent, Context, Entity, InteractiveElement, IntoElement, KeyDownEvent,
    ParentElement, Render, SharedString, Styled, Window, div, px,
};
use gpui_component::{
    h_flex,
    input::{Input, InputState, MaskPattern},
    radio::{Radio, RadioGroup},
    switch::Switch,
    v_flex,
};
use tip_core::{CurrencyFormat, TipTier};
use tracing::{debug, info};

use crate::{
    components::{make_button, make_labeled_row},
    config::CalculatorDefaults,
    models::{KeyPress, TipFormModel, TipScreen},
};

/// The calculator screen: cost field, tier choice, round-up switch,
/// Calculate button and the two result labels.
pub struct TipCalculatorForm {
    cost_of_service: Entity<InputState>,
    screen: TipScreen,
}

impl TipCalculatorForm {
    pub fn new(
        defaults: &CalculatorDefaults,
        format: CurrencyFormat,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let pattern = MaskPattern::Number {
            separator: Some(','),
            fraction: Some(2),
        };
        let cost_of_service = cx.new(|input_cx| {
            InputState::new(window, input_cx)
                .mask_pattern(pattern)
                .placeholder("Cost of Service")
        });

        let form = TipFormModel::new(Some(defaults.tier), defaults.round_up);
        Self {
            cost_of_service,
            screen: TipScreen::new(form, format),
        }
    }

    /// Copies the cost field into the screen model and recomputes both labels.
    fn calculate(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        let cost_text: SharedString = self.cost_of_service.read(cx).value();
        self.screen.set_cost_text(cost_text.as_str());
        debug!(form = %self.screen.form(), "calculate pressed");

        let labels = self.screen.calculate();
        info!(tip = %labels.tip, total = %labels.total, "labels updated");
        cx.notify();
    }

    fn on_cost_key_down(
        &mut self,
        event: &KeyDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let key = KeyPress::from_key_name(&event.keystroke.key);
        let handling = self.screen.handle_key(key);
        if handling.dismisses_keyboard() {
            debug!("enter pressed in cost field, releasing focus");
            window.blur();
            cx.stop_propagation();
        }
    }

    fn select_tier(
        &mut self,
        index: usize,
        cx: &mut Context<Self>,
    ) {
        let tier = TipTier::from_index(index);
        debug!(index, ?tier, "tip tier selected");
        self.screen.select_tier(tier);
        cx.notify();
    }

    fn set_round_up(
        &mut self,
        round_up: bool,
        cx: &mut Context<Self>,
    ) {
        self.screen.set_round_up(round_up);
        cx.notify();
    }
}

impl Render for TipCalculatorForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let form = self.screen.form();
        let selected_tier = form.tier.map(|tier| tier.index());

        let tier_options = RadioGroup::vertical("tip-options")
            .children(
                TipTier::all()
                    .iter()
                    .map(|tier| Radio::new(("tip-option", tier.index())).label(tier.label())),
            )
            .selected_index(selected_tier)
            .on_click(cx.listener(|this, index: &usize, _, cx| this.select_tier(*index, cx)));

        let round_up = Switch::new("round-up-switch")
            .checked(form.round_up)
            .label("Round up tip?")
            .on_click(cx.listener(|this, checked: &bool, _, cx| this.set_round_up(*checked, cx)));

        v_flex()
            .gap_4()
            .size_full()
            .child(
                make_labeled_row("Cost of Service:").child(
                    div()
                        .flex_grow()
                        .on_key_down(cx.listener(Self::on_cost_key_down))
                        .child(Input::new(&self.cost_of_service)),
                ),
            )
            .child(make_labeled_row("How was the service?").child(tier_options))
            .child(make_labeled_row("").child(round_up))
            .child(
                h_flex().justify_center().child(make_button(
                    "calculate-button",
                    "Calculate",
                    cx.listener(|this, _: &ClickEvent, _, cx| this.calculate(cx)),
                )),
            )
            .child(
                v_flex()
                    .items_end()
                    .gap_2()
                    .pr(px(8.))
                    .child(div().id("tip-result").child(self.screen.tip_label().to_string()))
                    .child(div().id("total-cost").child(self.screen.total_label().to_string())),
            )
    }
}

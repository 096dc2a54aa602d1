use gpui::{
    App, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription,
    Window, div, px,
};
use gpui_component::StyledExt;
use tip_core::CurrencyFormat;
use tracing::info;

#[cfg(not(target_os = "linux"))]
use crate::Quit;
#[cfg(not(target_os = "linux"))]
use crate::quit;
use crate::{components::TipCalculatorForm, config::CalculatorDefaults};

/// Top-level view of the main window. Owns the calculator form for the
/// lifetime of the window.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    form: Entity<TipCalculatorForm>,
}

impl AppWindow {
    pub fn new(
        defaults: &CalculatorDefaults,
        format: CurrencyFormat,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("Window closed callback");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        let form = cx.new(|form_cx| TipCalculatorForm::new(defaults, format, window, form_cx));

        info!("Window constructed");
        Self {
            _window_close_subscription: subscription,
            form,
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .v_flex()
            .size_full()
            .p(px(20.))
            .child(self.form.clone())
    }
}

pub mod tip_form;
pub mod window;

use gpui::{App, ClickEvent, Div, ParentElement, SharedString, Styled, TextAlign, Window, div, px};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{Sizable, h_flex};

pub use tip_form::TipCalculatorForm;
pub use window::AppWindow;

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .w(px(140.))
        .label(label.into())
        .on_click(on_click)
}

/// Creates the common row container: a right-aligned label followed by
/// whatever widget the caller adds as the next child.
pub fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .child(
            div()
                .min_w(px(150.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}

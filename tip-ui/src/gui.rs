use anyhow::Result;
use gpui::{
    App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use gpui_component::Root;
use tip_core::CurrencyFormat;
use tracing::info;

use crate::{Quit, components::AppWindow, config::Preferences, quit, theme::apply_theme};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Tip Time".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window, centred on the primary display.
pub fn open_main_window(
    prefs: &Preferences,
    format: CurrencyFormat,
    app_cx: &mut App,
) -> Result<()> {
    let window_size = size(px(prefs.window.width), px(prefs.window.height));
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            window_size,
            app_cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some("Tip Time".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let theme = prefs.theme;
    let defaults = prefs.calculator;
    app_cx.open_window(options, |window, cx| {
        apply_theme(theme, window, cx);
        let view = cx.new(|view_cx| AppWindow::new(&defaults, format, window, view_cx));
        cx.new(|root_cx| Root::new(view, window, root_cx))
    })?;

    info!(
        width = prefs.window.width,
        height = prefs.window.height,
        "main window opened"
    );
    Ok(())
}

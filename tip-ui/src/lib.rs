pub mod app;
pub mod components;
pub mod config;
pub mod gui;
pub mod logging;
pub mod models;
pub mod theme;

use gpui::{App, actions};
pub use gui::{open_main_window, setup_app};
use tracing::info;

actions!(tip_time, [Quit]);

// Takes a reference to the action (often unused) and mutable app context
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gpui::Application;
use tip_core::{CurrencyFormat, Locale, TipTier};
use tracing::{debug, error, info};

use tip_ui::{
    app::{HeadlessRequest, run_headless},
    config::Preferences,
    logging, open_main_window, setup_app,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator.
///
/// Opens the calculator window, or with `--cost` prints the tip and total
/// for the given bill and exits.
#[derive(Debug, Parser)]
struct Cli {
    /// Cost of service. Runs headless and prints both labels.
    #[arg(long)]
    cost: Option<String>,

    /// Tip tier for headless mode: 20, 18 or 15.
    #[arg(long)]
    tip: Option<TipTier>,

    /// Round the tip up to a whole currency unit (`--round-up false` to disable).
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    round_up: Option<bool>,

    /// Preferences file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level or filter directive; overrides the preferences file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut prefs = Preferences::load_or_default(cli.config.as_deref())
        .context("failed to load preferences")?;
    if let Some(level) = cli.log_level {
        prefs.logging.level = level;
    }
    if let Some(file) = cli.log_file {
        prefs.logging.file = Some(file);
    }

    let console = logging::ConsoleTarget::for_run(cli.cost.is_some());
    logging::init_logging(&prefs.logging, console)?;
    debug!("preferences:\n{}", prefs);

    let locale = Locale::from_env();
    let format = CurrencyFormat::for_locale(&locale);
    info!(%locale, symbol = format.symbol, "using locale currency format");

    if let Some(cost_text) = cli.cost {
        let request = HeadlessRequest {
            cost_text,
            tier: cli.tip.or(Some(prefs.calculator.tier)),
            round_up: cli.round_up.unwrap_or(prefs.calculator.round_up),
        };
        let labels = run_headless(&request, format);
        println!("{}", labels.tip);
        println!("{}", labels.total);
        return Ok(());
    }

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx| {
            setup_app(cx);
            if let Err(error) = open_main_window(&prefs, format, cx) {
                error!(?error, "failed to open main window");
                cx.quit();
            }
        });

    Ok(())
}

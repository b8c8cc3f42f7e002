use std::path::PathBuf;

use clap::Parser;
use gpui::Application;
use tracing::{error, info};

use tip_ui::{gui, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator: splits a bill, with tip, across a party.
///
/// Opens the calculator window; the flags only affect diagnostics.
#[derive(Debug, Parser)]
struct Cli {
    /// Log filter directive (e.g. `debug` or `tip_ui=trace`).
    /// Takes precedence over RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    info!("starting splitter");

    Application::new().run(|cx| {
        gui::setup_app(cx);
        if let Err(err) = gui::open_main_window(cx) {
            error!(?err, "failed to open main window");
            cx.quit();
        }
    });

    Ok(())
}

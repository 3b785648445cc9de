use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use step_driver::ArrayGenerator;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{routes::Route, StartupConfig, VisualizerApp};

#[derive(Parser, Debug)]
#[command(name = "thinkpixel", about = "Sorting and searching algorithm visualizer")]
struct Args {
    /// Page to open on launch, e.g. `/visualizer/merge-sort`.
    #[arg(long)]
    route: Option<String>,
    #[arg(long)]
    array_len: Option<usize>,
    /// Fixed seed for reproducible arrays.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    speed_ms: Option<u64>,
    /// Settings file; defaults to `thinkpixel.toml` in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(route) = args.route {
        settings.initial_route = route;
    }
    if let Some(len) = args.array_len {
        settings.array_len = len;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if let Some(speed_ms) = args.speed_ms {
        settings.speed_ms = speed_ms;
    }
    let settings = settings.validated()?;
    tracing::info!(?settings, "starting visualizer");

    let generator = ArrayGenerator::new(settings.array_spec(), settings.seed)
        .context("failed to prepare array generator")?;
    let startup = StartupConfig {
        route: Route::parse(&settings.initial_route),
        speed_ms: settings.speed_ms,
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ThinkPixel")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "ThinkPixel",
        options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx);
            Ok(Box::new(VisualizerApp::new(cmd_tx, ui_rx, generator, startup)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run visualizer window: {err}"))
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn parses_startup_flags() {
        let args = Args::try_parse_from([
            "thinkpixel",
            "--route",
            "/visualizer/quick-sort",
            "--array-len",
            "12",
            "--seed",
            "9",
            "--speed-ms",
            "150",
        ])
        .expect("flags");
        assert_eq!(args.route.as_deref(), Some("/visualizer/quick-sort"));
        assert_eq!(args.array_len, Some(12));
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.speed_ms, Some(150));
        assert!(args.config.is_none());
    }
}

use clap::Parser;
use log::LevelFilter;

use webpdrop::app::WebpDropApp;
use webpdrop::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("webpdrop")
            .with_inner_size([980.0, 680.0])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let optimize = cli.optimize;
    let inputs = cli.inputs;

    eframe::run_native(
        "webpdrop",
        options,
        Box::new(move |cc| Ok(Box::new(WebpDropApp::new(cc, optimize, inputs)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}

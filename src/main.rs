mod app;
mod engine;
mod error;
mod graph;
mod render;
mod source;
mod util;
mod view;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Graph document to display: a JSON file path, or `cmd:<program args>`
    /// whose stdout yields the document.
    graph: String,

    /// Proximity margin (pixels) for edge-triggered panning.
    #[arg(long, default_value_t = view::DEFAULT_PAN_MARGIN)]
    pan_margin: f32,

    /// Number of discrete zoom levels.
    #[arg(long, default_value_t = view::DEFAULT_ZOOM_TICKS)]
    zoom_ticks: usize,
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = app::ViewOptions {
        pan_margin: args.pan_margin,
        zoom_ticks: args.zoom_ticks,
    };
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "depviz",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::DepvizApp::new(cc, args.graph.clone(), options)))),
    )
}

mod app;
mod config;

use anyhow::Context;
use clap::Parser;

use config::SimConfig;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Number of nodes to generate.
    #[arg(long, default_value_t = 50)]
    nodes: usize,

    /// Distance below which two nodes are drawn linked.
    #[arg(long, default_value_t = 150.0)]
    threshold: f32,

    /// Target frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seed for node generation; a fresh seed is drawn and logged when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Overlay frame-rate statistics on the canvas.
    #[arg(long, default_value_t = false)]
    show_fps: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = SimConfig {
        width: args.width,
        height: args.height,
        node_count: args.nodes,
        link_threshold: args.threshold,
        target_fps: args.fps,
    };
    config
        .validate()
        .context("invalid simulation configuration")?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "generating {} nodes on a {}x{} canvas (threshold {}, seed {seed})",
        config.node_count,
        config.width,
        config.height,
        config.link_threshold,
    );

    let app = app::NetAnimApp::new(config, seed, args.show_fps)
        .context("failed to generate the node set")?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32, config.height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Linked nodes animation",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|error| anyhow::anyhow!("failed to start the animation window: {error}"))
}

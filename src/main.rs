use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use trackball::cli::Cli;
use trackball::loaders::load_drag_script;
use trackball::trackball::Trackball;

fn init_logging(quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(log::LevelFilter::Off);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let trackball = Trackball::new(cli.radius).context("Invalid --radius")?;
    let script = load_drag_script(&cli.script)?;

    let session = script.replay(trackball);
    info!("Replayed {} strokes with radius {}", script.strokes.len(), trackball.radius());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        let q = session.orientation;
        println!("orientation: [{:.6}, {:.6}, {:.6}, {:.6}]", q.x, q.y, q.z, q.w);
        println!("norm: {:.6}", q.length());
        println!("renorm_count: {}", session.renorm_count);
    }

    Ok(())
}

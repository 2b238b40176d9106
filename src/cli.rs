// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::trackball::TRACKBALL_SIZE;

#[derive(Parser, Debug, Clone)]
#[command(name = "trackball")]
#[command(about = "Replay recorded pointer drags through a virtual trackball", long_about = None)]
pub struct Cli {
    /// JSON drag script to replay
    pub script: PathBuf,

    /// Radius of the virtual ball in normalized device coordinates
    #[arg(long, default_value_t = TRACKBALL_SIZE)]
    pub radius: f32,

    /// Print the final session as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Disable console output other than the result
    #[arg(long, short)]
    pub quiet: bool,
}

// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "skyline-scene")]
#[command(about = "Procedural night skyline scene", long_about = None)]
pub struct Cli {
    /// JSON scene description; the built-in city is used when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Number of frames to run
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Target frame rate
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Step time by 1/fps per frame instead of following the wall clock
    #[arg(long)]
    pub simulate: bool,

    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Drop the gradient background
    #[arg(long = "no-background")]
    pub no_background: bool,

    /// Print the resolved scene description as JSON and exit
    #[arg(long = "print-config")]
    pub print_config: bool,
}

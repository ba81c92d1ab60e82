use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use skyline_scene::cli::Cli;
use skyline_scene::{CityScene, Driver, FixedStepFrames, FrameIterator, HeadlessViewer, RunSummary, SceneConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.scene {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if cli.no_background {
        config.background = None;
    }
    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let started = chrono::Local::now();
    info!("Starting at {}", started.format("%Y-%m-%d %H:%M:%S"));

    let viewer = HeadlessViewer::new(cli.width, cli.height);
    let mut driver = Driver::new(CityScene::new(config), viewer);
    driver.initialize()?;

    let summary: RunSummary = if cli.simulate {
        driver.run(FixedStepFrames::new(cli.fps, cli.frames))?
    } else {
        driver.run(FrameIterator::paced(cli.fps).with_limit(cli.frames))?
    };

    let viewer = driver.viewer();
    let elapsed = chrono::Local::now() - started;
    info!(
        "Done: {} frames, {} triangles per frame, {} KiB uploaded, {} ms",
        summary.frames,
        summary.triangles,
        viewer.uploaded_bytes() / 1024,
        elapsed.num_milliseconds()
    );
    Ok(())
}

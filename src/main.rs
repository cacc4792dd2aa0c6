use anyhow::Context;
use clap::Parser;
use log::info;
use skytrack::api::frame_to_json;
use skytrack::utils::init_logging;
use skytrack::{
    sensor_channel, ConfigurationManager, FrameCompositor, ObserverPosition, ReplaySource, Tracker,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Replay recorded ISS positions through the AR projector")]
struct Args {
    /// JSON array of recorded ISS records
    #[arg(long)]
    replay: PathBuf,
    /// Load tracker settings from JSON
    #[arg(long)]
    config: Option<PathBuf>,
    /// Observer latitude in degrees; without a fix the fallback placement is used
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,
    /// Observer longitude in degrees
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,
    /// Device heading in degrees from true north
    #[arg(long)]
    heading: Option<f64>,
    /// Number of frames to print before exiting
    #[arg(long, default_value_t = 10)]
    frames: usize,
    /// Override the polling interval
    #[arg(long)]
    interval_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut manager = match &args.config {
        Some(path) => ConfigurationManager::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConfigurationManager::new(),
    };
    if let Some(interval_ms) = args.interval_ms {
        manager.set_poll_interval_ms(interval_ms)?;
    }
    let config = manager.config().clone();
    init_logging(config.log_level);

    let source = ReplaySource::from_file(&args.replay)
        .with_context(|| format!("loading replay {}", args.replay.display()))?;

    let (publisher, sensors) = sensor_channel();
    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        publisher.publish_location(ObserverPosition::new(lat, lon));
    }
    if let Some(heading) = args.heading {
        publisher.publish_heading(heading);
    }

    let compositor = FrameCompositor::from_config(&config);
    let mut handle = Tracker::new(source, &config)?.spawn()?;
    let mut updates = handle.subscribe();

    for _ in 0..args.frames {
        updates
            .changed()
            .await
            .context("tracker stopped before all frames were produced")?;
        let snapshot = updates.borrow_and_update().clone();
        let frame = compositor.compose(&snapshot, &sensors);
        println!("{}", frame_to_json(&frame)?);
    }

    handle.stop();
    info!("printed {} frames", args.frames);
    Ok(())
}

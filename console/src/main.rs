//! Line-oriented console for the strip controller
//!
//! Reads one JSON command per line from stdin (the same records the web layer
//! sends) and prints one JSON status per line. `status` prints the controller
//! state, `demo` plays every mode once. The strip is turned off on exit.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    thread,
    time::Duration,
};

use ambient_strip::{DriverKind, StripConfig, StripController, handle_json, rgbw};
use anyhow::Context;
use clap::Parser;
use log::info;

#[derive(Debug, Parser)]
#[command(about = "Drive an RGBW LED strip with JSON commands")]
struct Args {
    /// TOML config file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the pixel count from the config
    #[arg(short, long)]
    pixels: Option<usize>,

    /// Never touch hardware
    #[arg(long)]
    headless: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => StripConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => StripConfig::default(),
    };
    if let Some(pixels) = args.pixels {
        config = config.with_pixel_count(pixels);
    }
    if args.headless {
        config = config.with_driver(DriverKind::Noop);
    }

    let controller = StripController::new(config).context("starting strip controller")?;
    let result = serve(&controller);
    controller.shutdown().context("turning the strip off")?;
    result
}

fn serve(controller: &StripController) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let reply = match line {
            "status" => serde_json::to_string(&controller.status())?,
            "demo" => {
                demo(controller)?;
                serde_json::to_string(&controller.status())?
            }
            _ => handle_json(controller, line).to_json()?,
        };
        writeln!(stdout, "{reply}")?;
        stdout.flush()?;
    }
    info!("stdin closed");
    Ok(())
}

/// Play every mode for a few seconds
fn demo(controller: &StripController) -> anyhow::Result<()> {
    let hold = |secs: u64| thread::sleep(Duration::from_secs(secs));

    info!("demo: solid purple");
    controller.set_color(rgbw(180, 0, 255, 0))?;
    hold(2);
    info!("demo: pulse blue");
    controller.pulse(rgbw(0, 0, 255, 0), 2.5)?;
    hold(5);
    info!("demo: bounce red");
    controller.bounce(rgbw(255, 0, 0, 0), 6, 0.015)?;
    hold(5);
    info!("demo: wave cyan");
    controller.wave(rgbw(0, 180, 255, 0), 20, 0.02)?;
    hold(5);
    info!("demo: fade magenta <-> gold");
    controller.fade_between(rgbw(255, 0, 180, 0), rgbw(255, 180, 0, 0), 3.0)?;
    hold(6);
    info!("demo: rainbow");
    controller.rainbow(0.01, 2)?;
    hold(6);
    info!("demo: heart pulse");
    controller.heart_pulse()?;
    hold(2);
    info!("demo: override burn");
    controller.override_burn(2.5)?;
    hold(3);
    info!("demo: weather rain");
    controller.weather("rain")?;
    hold(5);
    controller.off()?;
    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eframe::egui;

use imageresizer::app::ImageResizerApp;
use imageresizer::image_utils::{Settings, DEFAULT_QUALITY, DEFAULT_SCALE};
use imageresizer::resources::ENGLISH;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Resize a JPEG with a choice of interpolation filters"
)]
struct Args {
    /// Image to open on startup
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Quality of saved JPEG images (1-100)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Factor applied to width and height when resizing, in (0, 1]
    #[arg(short, long, default_value_t = DEFAULT_SCALE, value_parser = parse_scale)]
    scale: f64,
}

fn parse_scale(value: &str) -> Result<f64, String> {
    let scale: f64 = value
        .parse()
        .map_err(|_| format!("{value} is not a number"))?;
    if scale > 0.0 && scale <= 1.0 {
        Ok(scale)
    } else {
        Err(format!("{value} is outside (0, 1]"))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = Settings {
        quality: args.quality,
        scale: args.scale,
    };
    let initial_file = args.file;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ENGLISH.title)
            .with_maximized(true),
        ..Default::default()
    };

    eframe::run_native(
        ENGLISH.title,
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(ImageResizerApp::new(
                cc,
                &ENGLISH,
                settings,
                initial_file,
            )) as Box<dyn eframe::App>)
        }),
    )?;

    Ok(())
}

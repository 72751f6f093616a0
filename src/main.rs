use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use statnav::Screen;
use statnav::core::config;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "statnav", about = "Grouped stat navigation with spoken readouts")]
struct Args {
    /// Screen to open first
    #[arg(short, long, value_enum)]
    screen: Option<Screen>,

    /// Stat sheet (TOML) to load instead of the built-in demo
    #[arg(long)]
    sheet: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to statnav.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Ok(log_file) = File::create("statnav.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let resolved = config::resolve(&file_config, args.screen, args.sheet.as_deref());

    log::info!("statnav starting up on screen: {:?}", resolved.screen);

    statnav::tui::run(resolved)
}

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use modbus_configure::config;
use modbus_configure::generate::{self, GenerateOptions};
use modbus_configure::ui;

#[derive(clap::Parser)]
#[command(
    name = "modbus-configure",
    about = "Generate version-stamped libmodbus headers from configure.ac"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        short,
        long,
        default_value = ".",
        help = "Project root that relative paths resolve against"
    )]
    root: PathBuf,

    #[arg(long, help = "Extract and render without writing any file")]
    dry_run: bool,

    #[arg(long, help = "Fail if configure.ac declares no version")]
    strict: bool,

    #[arg(long, help = "Show configured targets and exit")]
    list: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("modbus-configure {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref(), &args.root) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if args.list {
        ui::display_targets(&config);
        return Ok(());
    }

    let options = GenerateOptions {
        root: args.root,
        dry_run: args.dry_run,
        strict: args.strict,
    };

    let report = match generate::run(&config, &options) {
        Ok(report) => report,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_report(&report, &config.prefix);
    Ok(())
}

use clap::Parser;
use estate::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "estate", about = "Browse property listings in the terminal")]
struct Args {
    /// Tab to open on: home, favorites or profile
    #[arg(short, long)]
    tab: Option<String>,

    /// Directory of <name>.txt pictures overriding the built-in ones
    #[arg(long)]
    assets_dir: Option<String>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The logger isn't up yet, so config problems go to stderr
    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Ignoring config file: {e}");
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            start_tab: args.tab,
            assets_dir: args.assets_dir,
            log_level: args.log_level,
        },
    );

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "Estate starting on tab {:?} (assets override: {:?})",
        resolved.start_tab,
        resolved.assets_dir
    );

    estate::tui::run(resolved)
}

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use taskboard::{config::Config, logger::Logger, ui};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file to load instead of the default lookup
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    ///
    /// The file goes to the path given with --config, or to the default
    /// location under the user's config directory.
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_config {
        let path = match args.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.log(format!(
        "Starting taskboard (commit delay {} ms, logging to file: {})",
        config.form.commit_delay_ms,
        logger.has_file_writer()
    ));

    ui::run_app(config, logger).await
}

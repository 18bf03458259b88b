use clap::Parser;
use log::info;

use ideapulse::{App, Cli, Config, Result};

pub fn initialize_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.data_dir)?;
    let app = App::new(config);
    app.run(cli.command)
}

fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

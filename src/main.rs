use anyhow::Result;
use clap::Parser;

use session_speechlet::{
    app::{load_config, Config},
    cli::{handle_command, Cli, Commands},
    utils::init_logger,
};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_logger(cli.verbose);

    // `init` may be pointed at a config file that doesn't exist yet
    let config = match cli.command {
        Commands::Init | Commands::Version => Config::default(),
        _ => load_config(cli.config.as_deref())?,
    };

    if !handle_command(&cli.command, &config, cli.config.as_deref())? {
        std::process::exit(1);
    }

    Ok(())
}

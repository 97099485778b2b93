//! mogit-wardrobe CLI
//!
//! Command-line interface for generating MogIt wardrobe data files.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Generate(Default::default())) {
        Commands::Generate(args) => commands::generate::run_generate(args, cli.quiet),
        Commands::List => {
            commands::list::run_list();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetOutput { dir } => commands::config::run_config_set_output(dir),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

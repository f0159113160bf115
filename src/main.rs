use std::process;
use log::{error, info};

use studiosite::utils::logger::{init_console_logging, Logger};
use studiosite::commands::{build_cli, CommandFactory, StudioCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    init_console_logging(matches.get_flag("verbose"));

    let log_file = matches
        .get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or("studiosite.log");
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let factory = StudioCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            info!("Running {} command", command.name());
            if let Err(e) = command.execute() {
                error!("{} command failed: {}", command.name(), e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}

use clap::Parser;
use linesync_runner::{execute_divider, execute_sync, init_logging, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(cli.verbose()) {
        eprintln!("logging setup failed: {error}");
    }

    let result = match &cli.command {
        Commands::Sync(command) => execute_sync(command),
        Commands::Divider(command) => execute_divider(command),
    };

    match result {
        Ok(output) => {
            println!("{output}");
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

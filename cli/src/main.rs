mod commands;
mod progress;
mod registry;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "granska")]
#[command(about = "Dependency vulnerability testing orchestrator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    #[command(about = "Test project dependencies against the vulnerability service")]
    Test(commands::Test),

    #[command(about = "List supported ecosystems")]
    Ecosystems(commands::Ecosystems),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Test(cmd) => {
            let exit_code = cmd.run().await?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Commands::Ecosystems(cmd) => {
            cmd.run();
        }
    }

    Ok(())
}

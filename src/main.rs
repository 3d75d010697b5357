use clap::Parser;
use live_scoreboard::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo(args) => cli::demo::run(args).await,
        Command::Play(args) => cli::play::run(args).await,
    }
}

use anyhow::Result;
use clap::Parser;
use lunarface::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    lunarface::run(cli).await
}

use aave_toolkit::adapter::inbound::cli::{self, command::Cli};
use clap::Parser;
use miette::IntoDiagnostic;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let _ = dotenvy::dotenv();

    // reqwest and tokio-tungstenite both sit on rustls; pin the ring provider.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();
    cli::execute(cli).await.into_diagnostic()
}

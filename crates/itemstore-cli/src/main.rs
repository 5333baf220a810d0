//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};

use itemstore_cli::{Cli, Commands, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve(args) => {
            let config = args.server_config();
            tracing::info!(
                addr = %config.bind_addr(),
                seed = config.seed_on_start,
                cors = ?config.cors,
                "Starting itemstore server"
            );
            itemstore_axum::start_server(config).await?;
        }
    }

    Ok(())
}

use clap::Parser;
use db_install::args::InstallArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "db_install=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = InstallArgs::parse();

    println!("admin login: {}", args.login);
    println!("database folder: {}", args.database_dir.display());
    println!("configured port: {}", args.port);

    tracing::debug!("arguments collected, ready for database generation");

    Ok(())
}

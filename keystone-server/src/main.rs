use color_eyre::eyre::Result;
use keystone::{
    AccountRepository, HashMapAccountStore, KeystoneService, PostgresAccountStore,
    RegexEmailValidator, adapters::config::Settings, configure_postgresql,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Standalone login/signup server built on the keystone library
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = Settings::load()?;

    match &settings.postgres.url {
        Some(url) => {
            let pg_pool = configure_postgresql(url).await?;
            serve(PostgresAccountStore::new(pg_pool), &settings).await
        }
        None => {
            tracing::warn!("No postgres url configured, accounts are kept in memory");
            serve(HashMapAccountStore::new(), &settings).await
        }
    }
}

async fn serve<A>(accounts: A, settings: &Settings) -> Result<()>
where
    A: AccountRepository + Clone + 'static,
{
    let service = KeystoneService::new(
        accounts,
        RegexEmailValidator::new(),
        settings.auth.jwt_auth_config(),
        settings.auth.timeout(),
    );

    let listener = tokio::net::TcpListener::bind(settings.server.address()).await?;
    tracing::info!("Starting keystone service...");

    service
        .run_standalone(listener, Some(settings.auth.allowed_origins.clone()))
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

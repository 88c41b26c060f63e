use clap::{Parser, Subcommand};
use k_resolver_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "k-resolver")]
#[command(version)]
#[command(about = "K-Resolver - Korean ISP DNS directory, lookup and ISP detection service")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", env = "KRESOLVER_CONFIG")]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long, env = "KRESOLVER_BIND")]
    bind: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long, env = "KRESOLVER_PORT")]
    port: Option<u16>,

    /// Database URL (e.g. sqlite:k-resolver.db)
    #[arg(long, env = "KRESOLVER_DATABASE_URL")]
    database_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "KRESOLVER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Comma-separated list of allowed CORS origins, `*` for any
    #[arg(long, env = "KRESOLVER_CORS_ORIGINS")]
    cors_origins: Option<String>,

    /// Deployment environment tag
    #[arg(long, env = "KRESOLVER_ENVIRONMENT")]
    environment: Option<String>,

    /// Bearer token for the ASN lookup service
    #[arg(long, env = "KRESOLVER_ASN_API_KEY", hide_env_values = true)]
    asn_api_key: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Run the HTTP service (default)
    Serve,
    /// Load the built-in ISP directory into an empty store and exit
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Serve);

    let cli_overrides = CliOverrides {
        environment: cli.environment,
        bind_address: cli.bind,
        port: cli.port,
        database_url: cli.database_url,
        log_level: cli.log_level,
        cors_origins: cli.cors_origins,
        asn_api_key: cli.asn_api_key,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Starting K-Resolver"
    );

    let pool = bootstrap::init_database(&config.database).await?;
    let repos = di::Repositories::new(pool);

    if command == Command::Seed {
        bootstrap::seed_directory(&repos).await?;
        info!("Seed complete");
        return Ok(());
    }

    if config.database.seed_on_startup {
        bootstrap::seed_directory(&repos).await?;
    }

    let adapters = di::Adapters::new(&config)?;
    let use_cases = di::UseCases::new(&repos, &adapters);
    let app_state = use_cases.into_app_state();

    let web_addr = server::bind_addr(&config.server)?;

    server::start_web_server(web_addr, app_state, &config.cors).await?;

    info!("Server shutdown complete");
    Ok(())
}

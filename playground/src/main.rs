use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use lingo_playground::{Config, build_middleware, handlers, logging};

#[derive(Parser, Debug)]
#[command(name = "lingo-playground", version, about = "Playground server for the lingo i18n middleware")]
struct Args {
    /// Path to the configuration file (default: conf/config.toml)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    let _guard = logging::init_logging(&config.logging)?;

    let middleware = build_middleware(&config.i18n).await?;
    let app = handlers::router(middleware)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        "lingo playground listening on http://{} ({} detector)",
        addr,
        config.i18n.detector.as_str()
    );

    axum::serve(listener, app).await?;
    Ok(())
}

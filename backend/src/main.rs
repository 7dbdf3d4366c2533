//! Backend entry point: loads settings, initialises logging and serves the
//! REST API.

mod server;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerSettings, create_server};

fn init_tracing(pretty: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let result = if pretty {
        fmt().with_env_filter(filter).pretty().try_init()
    } else {
        fmt().with_env_filter(filter).json().try_init()
    };
    if let Err(err) = result {
        warn!(error = %err, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    init_tracing(settings.log_pretty);

    create_server(&settings)?.await
}

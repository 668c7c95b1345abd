use std::{net::SocketAddr, sync::Arc};

use clap::{CommandFactory, Parser};
use tracing::{error, info};
use webhook_sink::{
    build_app,
    config::{Cli, Config},
    logging,
    store::FilePayloadStore,
    AppState,
};

#[tokio::main]
async fn main() {
    logging::init_logging();

    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(1);
    });
    let config = match Config::from_cli(cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            let _ = Cli::command().print_help();
            std::process::exit(1);
        }
    };

    let store = Arc::new(FilePayloadStore::new(config.file_path.clone()));
    let state = AppState::new(config.auth_key.clone(), store);
    let app = build_app(state);

    let bind_socket = config.bind_socket();
    let listener = match tokio::net::TcpListener::bind(bind_socket).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %bind_socket, error = %err, "failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(
        port = config.bind_port,
        file = %config.file_path.display(),
        "server starting"
    );

    if let Err(err) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        error!(error = %err, "server terminated");
        std::process::exit(1);
    }
}

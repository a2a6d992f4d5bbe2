use std::sync::Arc;

use snafu::ResultExt;

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod logger;
pub mod model;
pub mod page;
pub mod source;
pub mod store;
pub mod table;
pub mod view;

use crate::api::App;
use crate::config::Config;
use crate::error::*;
use crate::source::ChannelApi;
use crate::view::View;

/// Mount the channel view and serve it until ctrl-c.
pub async fn run(config: &Config) -> Result<(), ApplicationError> {
    let source = ChannelApi::from_config(&config.api()).context(CreateClientSnafu)?;
    tracing::info!(endpoint = %source.endpoint(), "mounting channel view");

    let view = Arc::new(View::mount(source));
    let engine = api::create_engine().context(TemplatesSnafu)?;
    let router = api::create_router(App::new(engine, view));

    let listener = tokio::net::TcpListener::bind(config.host)
        .await
        .context(BindAddressSnafu {
            address: config.host,
        })?;
    tracing::info!(address = %config.host, "serving channel board");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context(WebServerSnafu)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}

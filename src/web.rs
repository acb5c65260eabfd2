use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, Endpoint, EndpointExt, Route, Server};

use crate::opts::WebOpts;
use crate::prelude::*;
use crate::web::gateway::{Gateway, GatewayMiddleware};
use crate::web::middleware::{ErrorMiddleware, SecurityHeadersMiddleware, SentryMiddleware};

pub mod gateway;
mod middleware;
mod payload;
#[cfg(test)]
mod test;
mod views;

pub async fn run(opts: &WebOpts, gateway: Gateway) -> Result {
    let app = create_app(gateway);
    let address = (IpAddr::from_str(&opts.host)?, opts.port);
    info!(host = %opts.host, port = opts.port, "listening…");
    Server::new(TcpListener::bind(address))
        .run(app)
        .await
        .with_context(|| format!("failed to serve on {}:{}", opts.host, opts.port))?;
    Ok(())
}

pub fn create_app(gateway: Gateway) -> impl Endpoint {
    Route::new()
        .at("/ping", get(views::ping::get))
        .at("/linearregression", views::linear_regression::handle)
        .with(GatewayMiddleware::new(gateway))
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(SecurityHeadersMiddleware)
        .with(SentryMiddleware)
}

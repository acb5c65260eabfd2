use clap::Parser;

use crate::opts::Opts;
use crate::prelude::*;

mod logging;
mod opts;
mod prelude;
mod regression;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = logging::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting…");

    let gateway = opts.gateway.into_gateway()?;
    if !gateway.is_enabled() {
        warn!("the gateway check is disabled, all requests are admitted");
    }
    web::run(&opts.web, gateway).await
}

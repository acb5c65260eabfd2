//! CLI options.

use clap::{ArgAction, Args, Parser};

use crate::prelude::*;
use crate::web::gateway::Gateway;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    /// Sentry DSN
    #[arg(short, long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Sentry performance monitoring sample rate
    #[arg(long, env = "LINREG_TRACES_SAMPLE_RATE", default_value = "0.1")]
    pub traces_sample_rate: f32,

    #[command(flatten)]
    pub web: WebOpts,

    #[command(flatten)]
    pub gateway: GatewayOpts,
}

#[derive(Args)]
pub struct WebOpts {
    /// Web application bind host
    #[arg(long, env = "LINREG_HOST", default_value = "::")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, env = "LINREG_PORT", default_value = "50000")]
    pub port: u16,
}

#[derive(Args)]
pub struct GatewayOpts {
    /// Only admit requests carrying the gateway proxy secret
    #[arg(
        long = "gateway",
        env = "LINREG_GATEWAY",
        default_value_t = !cfg!(debug_assertions),
        action = ArgAction::Set,
    )]
    pub is_enabled: bool,

    /// Hex-encoded SHA-512 digest of the gateway proxy secret
    #[arg(long, env = "LINREG_GATEWAY_SECRET_DIGEST", value_parser = parse_secret_digest)]
    pub gateway_secret_digest: Option<String>,
}

impl GatewayOpts {
    pub fn into_gateway(self) -> Result<Gateway> {
        match (self.is_enabled, self.gateway_secret_digest) {
            (false, _) => Ok(Gateway::disabled()),
            (true, Some(digest)) => Ok(Gateway::new(digest)),
            (true, None) => Err(anyhow!("the gateway is enabled but the secret digest is not set")),
        }
    }
}

fn parse_secret_digest(value: &str) -> Result<String> {
    let digest = hex::decode(value).context("the secret digest must be hex-encoded")?;
    if digest.len() == 64 {
        Ok(value.to_lowercase())
    } else {
        Err(anyhow!("expected a 512-bit digest, got {} bits", digest.len() * 8))
    }
}

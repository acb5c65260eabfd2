//! Admits only the requests proxied by the API gateway.
//!
//! The gateway adds a pre-shared secret header to each request it forwards.
//! Only the SHA-512 digest of the secret is configured here.

use poem::http::HeaderMap;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};
use sha2::{Digest, Sha512};

use crate::prelude::*;
use crate::web::payload::{Payload, GATEWAY_REQUIRED};

/// `X-RapidAPI-Proxy-Secret`, lowercase as header names are case-insensitive.
pub const SECRET_HEADER: &str = "x-rapidapi-proxy-secret";

#[derive(Clone, Debug)]
pub struct Gateway {
    /// Lowercase hex digest, [`None`] means the check is disabled.
    secret_digest: Option<String>,
}

impl Gateway {
    pub fn new(secret_digest: impl AsRef<str>) -> Self {
        Self {
            secret_digest: Some(secret_digest.as_ref().to_lowercase()),
        }
    }

    pub const fn disabled() -> Self {
        Self {
            secret_digest: None,
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.secret_digest.is_some()
    }

    pub fn admits(&self, headers: &HeaderMap) -> bool {
        match &self.secret_digest {
            Some(secret_digest) => headers
                .get_all(SECRET_HEADER)
                .iter()
                .any(|value| &hash_secret(value.as_bytes()) == secret_digest),
            None => true,
        }
    }
}

pub fn hash_secret(secret: &[u8]) -> String {
    hex::encode(Sha512::digest(secret))
}

pub struct GatewayMiddleware(Gateway);

impl GatewayMiddleware {
    pub const fn new(gateway: Gateway) -> Self {
        Self(gateway)
    }
}

impl<E: Endpoint> Middleware<E> for GatewayMiddleware {
    type Output = GatewayMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        GatewayMiddlewareImpl {
            ep,
            gateway: self.0.clone(),
        }
    }
}

pub struct GatewayMiddlewareImpl<E> {
    ep: E,
    gateway: Gateway,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for GatewayMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        if self.gateway.admits(request.headers()) {
            Ok(self.ep.call(request).await?.into_response())
        } else {
            info!(method = ?request.method(), uri = ?request.uri(), "denied: not from the gateway");
            Ok(Payload::message(GATEWAY_REQUIRED).into_response())
        }
    }
}

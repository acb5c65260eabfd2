use std::collections::BTreeMap;

use poem::http::header;
use poem::{Endpoint, Middleware, Request, Result};
use sentry::protocol::Context;
use serde_json::Value;

use crate::web::gateway::SECRET_HEADER;

/// Describes the incoming request in the Sentry scope, so that the events raised
/// while handling it point back to the caller.
pub struct SentryMiddleware;

impl<E: Endpoint> Middleware<E> for SentryMiddleware {
    type Output = SentryMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        SentryMiddlewareImpl { ep }
    }
}

pub struct SentryMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for SentryMiddlewareImpl<E> {
    type Output = E::Output;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let context = describe(&request);
        sentry::configure_scope(|scope| {
            scope.set_tag("http.method", request.method());
            scope.set_tag("http.route", request.uri().path());
            scope.set_tag("client.address", request.remote_addr());
            scope.set_context("request", Context::Other(context));
        });
        self.ep.call(request).await
    }
}

/// Collects the request headers worth attaching, never the gateway secret itself.
fn describe(request: &Request) -> BTreeMap<String, Value> {
    let headers = request.headers();
    let header_value = |name: header::HeaderName| -> Value {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .into()
    };
    BTreeMap::from([
        ("content_length".to_string(), header_value(header::CONTENT_LENGTH)),
        ("content_type".to_string(), header_value(header::CONTENT_TYPE)),
        ("user_agent".to_string(), header_value(header::USER_AGENT)),
        (
            "has_gateway_secret".to_string(),
            headers.contains_key(SECRET_HEADER).into(),
        ),
    ])
}

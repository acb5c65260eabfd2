use poem::{handler, IntoResponse};

use crate::prelude::*;
use crate::web::payload::{Payload, PONG};

#[handler]
#[instrument(skip_all, level = "debug")]
pub async fn get() -> impl IntoResponse {
    debug!("pong");
    Payload::message(PONG)
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;

    use crate::web::gateway::SECRET_HEADER;
    use crate::web::payload::GATEWAY_REQUIRED;
    use crate::web::test::{create_gated_test_client, create_test_client, SECRET};

    #[tokio::test]
    async fn get_ping_ok() {
        let response = create_test_client().get("/ping").send().await;
        response.assert_status_is_ok();
        response.assert_header("x-content-type-options", "nosniff");
        let json = response.json().await;
        json.value().object().get("Message").assert_string("pong");
    }

    #[tokio::test]
    async fn post_ping_method_not_allowed() {
        let response = create_test_client().post("/ping").body("{}").send().await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn get_ping_without_secret_denied() {
        let response = create_gated_test_client().get("/ping").send().await;
        response.assert_status_is_ok();
        let json = response.json().await;
        json.value().object().get("Message").assert_string(GATEWAY_REQUIRED);
    }

    #[tokio::test]
    async fn get_ping_with_secret_ok() {
        let response = create_gated_test_client()
            .get("/ping")
            .header(SECRET_HEADER, SECRET)
            .send()
            .await;
        response.assert_status_is_ok();
        let json = response.json().await;
        json.value().object().get("Message").assert_string("pong");
    }
}

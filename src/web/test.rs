use poem::test::TestClient;
use poem::Endpoint;

use crate::web::create_app;
use crate::web::gateway::{hash_secret, Gateway};

pub const SECRET: &str = "gateway-secret";

pub fn create_test_client() -> TestClient<impl Endpoint> {
    TestClient::new(create_app(Gateway::disabled()))
}

pub fn create_gated_test_client() -> TestClient<impl Endpoint> {
    TestClient::new(create_app(Gateway::new(hash_secret(SECRET.as_bytes()))))
}

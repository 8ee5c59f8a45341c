use crate::api::{configure, APIError};
use crate::models::*;
use actix_web::{
    dev::{Service, ServiceResponse},
    test::{self, read_body_json},
    App,
};
use serde::de::DeserializeOwned;

pub fn test_log_init() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

pub async fn get_test_app(
    state: GlobalState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(actix_web::web::Data::new(state))
            .wrap(crate::telemetry::TracingLogger)
            .configure(configure),
    )
    .await
}

fn is_json(resp: &ServiceResponse) -> bool {
    resp.headers()
        .get("content-type")
        .and_then(|h| h.to_str().ok())
        .map(|h| h.starts_with("application/json"))
        .unwrap_or_default()
}

pub async fn assert_status(
    resp: ServiceResponse,
    expected_status: http::StatusCode,
) -> ServiceResponse {
    let status = resp.status();
    if status == expected_status {
        return resp;
    }

    let error = if is_json(&resp) {
        let err: APIError = get_content(resp).await;
        err.to_string()
    } else {
        "No error message".to_string()
    };

    panic!(
        "Unexpected response code (got == expected)\n  got: {}\n  expected: {}\n  error: {}",
        status, expected_status, error
    )
}

pub async fn get_content<T: DeserializeOwned>(resp: ServiceResponse) -> T {
    assert!(is_json(&resp), "the response should be a JSON document");
    read_body_json(resp).await
}

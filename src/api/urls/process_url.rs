use crate::models::*;
use crate::utils::process_url;
use actix_web::{post, web};
use tracing_batteries::prelude::*;

#[tracing::instrument(fields(otel.kind = "internal"))]
#[post("/process-url")]
pub async fn process_url_v1(body: web::Json<ProcessUrlV1>) -> ProcessedUrlV1 {
    let ProcessUrlV1 { url, operation } = body.into_inner();

    ProcessedUrlV1 {
        processed_url: process_url(&url, operation),
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test::*;
    use crate::api::APIError;
    use crate::models::*;
    use serde_json::json;

    #[actix_rt::test]
    async fn process_url_v1() {
        test_log_init();

        let content: ProcessedUrlV1 = test_request!(POST "/process-url", json!({
            "url": "https://BykFood.com/Order/123/",
            "operation": "canonical"
        }) => OK with content);
        assert_eq!(content.processed_url, "https://BykFood.com/Order/123".to_string());

        let content: ProcessedUrlV1 = test_request!(POST "/process-url", json!({
            "url": "https://BykFood.com/Order/123",
            "operation": "all"
        }) => OK with content);
        assert_eq!(content.processed_url, "https://www.byfood.com/order/123".to_string());

        let content: ProcessedUrlV1 = test_request!(POST "/process-url", json!({
            "url": "http://EXAMPLE.com/A?X=1",
            "operation": "redirection"
        }) => OK with content);
        assert_eq!(content.processed_url, "http://www.byfood.com/a?x=1".to_string());

        let content: ProcessedUrlV1 = test_request!(POST "/process-url", json!({
            "url": "https://Example.com/%C3%89T%C3%89#%C3%89",
            "operation": "redirection"
        }) => OK with content);
        assert_eq!(
            content.processed_url,
            "https://www.byfood.com/%C3%A9t%C3%A9#%C3%A9".to_string()
        );
    }

    #[actix_rt::test]
    async fn process_url_v1_passthrough() {
        test_log_init();

        let content: ProcessedUrlV1 = test_request!(POST "/process-url", json!({
            "url": "https://BykFood.com/Order/123/?A=B",
            "operation": "shorten"
        }) => OK with content);
        assert_eq!(content.processed_url, "https://BykFood.com/Order/123/?A=B".to_string());

        let content: ProcessedUrlV1 = test_request!(POST "/process-url", json!({
            "url": "https://BykFood.com/Order/123/"
        }) => OK with content);
        assert_eq!(content.processed_url, "https://BykFood.com/Order/123/".to_string());

        let content: ProcessedUrlV1 = test_request!(POST "/process-url", json!({
            "url": "https://BykFood.com/Order/123/",
            "operation": null
        }) => OK with content);
        assert_eq!(content.processed_url, "https://BykFood.com/Order/123/".to_string());

        let content: ProcessedUrlV1 = test_request!(POST "/process-url", json!({
            "url": "::not a url::",
            "operation": "all"
        }) => OK with content);
        assert_eq!(content.processed_url, "::not a url::".to_string());
    }

    #[actix_rt::test]
    async fn process_url_v1_response_format() {
        test_log_init();

        let content: serde_json::Value = test_request!(POST "/process-url", json!({
            "url": "https://example.com/",
            "operation": "canonical"
        }) => OK with content);
        assert_eq!(content, json!({ "processedURL": "https://example.com" }));
    }

    #[actix_rt::test]
    async fn process_url_v1_malformed() {
        test_log_init();

        let err: APIError =
            test_request!(POST "/process-url", raw "{\"url\": " => BAD_REQUEST with content);
        assert_eq!(err.code, 400);
        assert_eq!(err.error, "Bad Request".to_string());

        test_request!(POST "/process-url", json!({ "operation": "all" }) => BAD_REQUEST);
    }
}

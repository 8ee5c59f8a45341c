use crate::api::APIError;
use crate::{models::*, telemetry::TraceMessageExt};
use actix_web::{get, web};
use tracing_batteries::prelude::*;

#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[get("/pingdb")]
pub async fn ping_db_v1(state: web::Data<GlobalState>) -> Result<MessageV1, APIError> {
    state
        .store
        .send(PingDatabase {}.trace())
        .await?
        .map(MessageV1::new)
}

#[cfg(test)]
mod tests {
    use crate::api::test::*;
    use crate::models::*;

    #[actix_rt::test]
    async fn ping_db_v1() {
        test_log_init();

        let content: MessageV1 = test_request!(GET "/pingdb" => OK with content);
        assert_eq!(content.message, "Database connected successfully".to_string());
    }
}

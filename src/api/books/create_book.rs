use crate::api::APIError;
use crate::{models::*, telemetry::TraceMessageExt};
use actix_web::{post, web};
use tracing_batteries::prelude::*;

#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[post("/books")]
pub async fn create_book_v1(
    body: web::Json<NewBookV1>,
    state: web::Data<GlobalState>,
) -> Result<BookV1, APIError> {
    let msg = body.into_inner().into_message()?;
    state
        .store
        .send(msg.trace())
        .await?
        .map(|book| book.into())
}

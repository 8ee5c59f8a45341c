use crate::api::{book_id, APIError};
use crate::{models::*, telemetry::TraceMessageExt};
use actix_web::{put, web, HttpRequest};
use tracing_batteries::prelude::*;

#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[put("/books/{id}")]
pub async fn update_book_v1(
    req: HttpRequest,
    body: web::Json<BookPatchV1>,
    state: web::Data<GlobalState>,
) -> Result<BookV1, APIError> {
    let id = book_id(&req)?;
    let msg = body.into_inner().into_message(id)?;
    state
        .store
        .send(msg.trace())
        .await?
        .map(|book| book.into())
}

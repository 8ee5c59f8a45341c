use crate::api::{book_id, APIError};
use crate::{models::*, telemetry::TraceMessageExt};
use actix_web::{get, web, HttpRequest};
use tracing_batteries::prelude::*;

#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[get("/books/{id}")]
pub async fn get_book_v1(
    req: HttpRequest,
    state: web::Data<GlobalState>,
) -> Result<BookV1, APIError> {
    let id = book_id(&req)?;
    state
        .store
        .send(GetBook { id }.trace())
        .await?
        .map(|book| book.into())
}

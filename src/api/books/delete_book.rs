use crate::api::{book_id, APIError};
use crate::{models::*, telemetry::TraceMessageExt};
use actix_web::{delete, web, HttpRequest};
use tracing_batteries::prelude::*;

#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[delete("/books/{id}")]
pub async fn delete_book_v1(
    req: HttpRequest,
    state: web::Data<GlobalState>,
) -> Result<MessageV1, APIError> {
    let id = book_id(&req)?;
    state
        .store
        .send(DeleteBook { id }.trace())
        .await?
        .map(|_| MessageV1::new("Book deleted successfully"))
}

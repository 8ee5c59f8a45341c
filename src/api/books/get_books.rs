use crate::api::APIError;
use crate::{models::*, telemetry::TraceMessageExt};
use actix_web::{get, web};
use tracing_batteries::prelude::*;

#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[get("/books")]
pub async fn get_books_v1(
    state: web::Data<GlobalState>,
) -> Result<web::Json<Vec<BookV1>>, APIError> {
    state
        .store
        .send(ListBooks {}.trace())
        .await?
        .map(|books| books.into_iter().map(|b| b.into()).collect::<Vec<_>>())
        .map(web::Json)
}

#[cfg(test)]
mod tests {
    use crate::api::test::*;
    use crate::models::*;

    #[actix_rt::test]
    async fn get_books_v1() {
        test_log_init();

        test_state!(
            state = [
                CreateBook {
                    title: "Kokoro".to_string(),
                    author: "Natsume Soseki".to_string(),
                    year: 1914,
                },
                CreateBook {
                    title: "Snow Country".to_string(),
                    author: "Yasunari Kawabata".to_string(),
                    year: 1948,
                }
            ]
        );

        let content: Vec<BookV1> = test_request!(GET "/books" => OK with content | state = state);
        assert_eq!(content.len(), 2);
        assert_eq!(content[0].title, "Kokoro".to_string());
        assert_eq!(content[1].title, "Snow Country".to_string());
        assert_eq!(content[1].year, 1948);
        assert!(content[0].id < content[1].id, "books should be listed in id order");
    }

    #[actix_rt::test]
    async fn get_books_v1_empty() {
        test_log_init();

        let content: Vec<BookV1> = test_request!(GET "/books" => OK with content);
        assert!(content.is_empty());
    }
}

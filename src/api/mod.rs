#[macro_use]
mod macros;

mod books;
mod error;
mod health;
mod urls;

#[cfg(test)]
pub mod test;

use actix_web::web;

pub use error::APIError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler));

    books::configure(cfg);
    health::configure(cfg);
    urls::configure(cfg);
}

/// Reads the numeric `{id}` segment of a route, identifiers which are not
/// numbers can never match a stored book.
fn book_id(req: &actix_web::HttpRequest) -> Result<u64, APIError> {
    req.match_info().query("id").parse().map_err(|_| {
        APIError::not_found("The book you requested could not be found in the database.")
    })
}

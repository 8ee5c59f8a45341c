use actix_web::web;

mod create_book;
mod delete_book;
mod get_book;
mod get_books;
mod update_book;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_books::get_books_v1)
        .service(get_book::get_book_v1)
        .service(create_book::create_book_v1)
        .service(update_book::update_book_v1)
        .service(delete_book::delete_book_v1);
}

use actix_web::web;

mod get_health;
mod open;
mod ping_db;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_health::get_health_v1)
        .service(open::open_v1)
        .service(ping_db::ping_db_v1);
}

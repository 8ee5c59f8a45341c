use actix_web::web;

mod process_url;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(process_url::process_url_v1);
}

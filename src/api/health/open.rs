use crate::models::MessageV1;
use actix_web::get;

#[get("/open")]
pub async fn open_v1() -> MessageV1 {
    MessageV1::new("The library is open")
}

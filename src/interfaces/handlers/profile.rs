use actix_web::{HttpResponse, Responder, get};

use crate::entities::profile::PROFILE_DATA;

/// Read-only profile/resume document for the page-rendering layer.
#[get("/profile")]
pub async fn get_profile() -> impl Responder {
    HttpResponse::Ok().json(&*PROFILE_DATA)
}

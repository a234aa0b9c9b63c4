use actix_web::web;

use crate::{
    email::resend::EmailSender,
    handlers::{contact::submit_contact, home::home, profile::get_profile, system::health_check},
};

pub fn configure_routes<M>(cfg: &mut web::ServiceConfig)
where
    M: EmailSender + 'static,
{
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .service(get_profile)
            .service(web::resource("/contact").route(web::post().to(submit_contact::<M>))),
    );
}

use std::time::Instant;

use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{error, warn};

use crate::{
    AppState,
    email::resend::EmailSender,
    entities::contact::ContactForm,
    errors::ContactError,
    limiter::rate_limiter::minutes_until,
    utils::client_ip::client_ip,
};

/// `POST /api/contact`
///
/// Identity -> rate-limit gate -> validation -> delivery, early exit on the
/// first failure. The body is taken as raw bytes so a rate-limited request is
/// answered without ever parsing its payload.
pub async fn submit_contact<M>(
    req: HttpRequest,
    state: web::Data<AppState<M>>,
    body: web::Bytes,
) -> Result<HttpResponse, ContactError>
where
    M: EmailSender + 'static,
{
    let client = client_ip(&req);
    let now = Instant::now();

    let decision = state.rate_limiter.check(&client, now);
    if !decision.allowed {
        warn!(%client, "contact submission rate limited");
        return Err(ContactError::RateLimited {
            minutes: minutes_until(decision.reset_time, now),
        });
    }

    let form: ContactForm = serde_json::from_slice(&body).map_err(|cause| {
        error!(%client, %cause, "unparseable contact payload");
        ContactError::Unexpected
    })?;

    let response = state.contact_handler.submit(form).await?;
    Ok(HttpResponse::Ok().json(response))
}

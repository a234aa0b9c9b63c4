mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{email, limiter, utils};
pub use interfaces::{handlers, routes};

use email::resend::{EmailSender, ResendClient};
use limiter::rate_limiter::{InMemoryRequestLog, SlidingWindowLimiter};
use use_cases::contact::ContactHandler;

/// Shared per-process state. The rate limiter owns the only mutable resource
/// in the app (the client request log), scoped to process lifetime.
pub struct AppState<M: EmailSender = ResendClient> {
    pub contact_handler: ContactHandler<M>,
    pub rate_limiter: SlidingWindowLimiter<InMemoryRequestLog>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let mailer = config.resend_api_key.clone().map(ResendClient::new);
        if mailer.is_none() {
            tracing::warn!("RESEND_API_KEY not set, contact submissions will be rejected");
        }

        AppState {
            contact_handler: ContactHandler::new(mailer),
            rate_limiter: SlidingWindowLimiter::new(InMemoryRequestLog::new()),
        }
    }
}

impl<M: EmailSender> AppState<M> {
    /// State wired with an arbitrary mailer, used by tests to swap in mocks.
    pub fn with_mailer(mailer: Option<M>) -> Self {
        AppState {
            contact_handler: ContactHandler::new(mailer),
            rate_limiter: SlidingWindowLimiter::new(InMemoryRequestLog::new()),
        }
    }
}

use tracing::error;

use crate::{
    email::resend::EmailSender,
    entities::contact::{ContactForm, ContactResponse},
    errors::ContactError,
};

const THANK_YOU_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Validates a submission and forwards it to the email provider. The mailer
/// is `None` when no API key was configured; that surfaces per request, not
/// at boot, so the rest of the site keeps serving.
pub struct ContactHandler<M>
where
    M: EmailSender,
{
    mailer: Option<M>,
}

impl<M> ContactHandler<M>
where
    M: EmailSender,
{
    pub fn new(mailer: Option<M>) -> Self {
        ContactHandler { mailer }
    }

    /// Validation, config check, delivery. Early exit on first failure; the
    /// email is either fully sent or never attempted.
    pub async fn submit(&self, form: ContactForm) -> Result<ContactResponse, ContactError> {
        form.validate()?;

        let Some(mailer) = &self.mailer else {
            error!("email provider API key is not configured, rejecting contact submission");
            return Err(ContactError::NotConfigured);
        };

        if let Err(cause) = mailer.send_contact_email(&form).await {
            error!(%cause, "failed to deliver contact email");
            return Err(ContactError::DeliveryFailed);
        }

        Ok(ContactResponse {
            success: true,
            message: THANK_YOU_MESSAGE.to_string(),
        })
    }
}

use std::time::Duration;

use async_trait::async_trait;
use derive_more::Display;
use reqwest::StatusCode;

use crate::entities::contact::ContactForm;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";
const FROM_ADDRESS: &str = "onboarding@resend.dev";
const OWNER_INBOX: &str = "yomalpraveen614@gmail.com";

/// The provider call is the only external I/O in the request pipeline; keep
/// it bounded so a hanging provider still yields exactly one response.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Display)]
pub enum EmailError {
    #[display("transport error: {_0}")]
    Transport(String),

    #[display("provider returned {status}: {body}")]
    Provider { status: StatusCode, body: String },
}

impl From<reqwest::Error> for EmailError {
    fn from(err: reqwest::Error) -> Self {
        EmailError::Transport(err.to_string())
    }
}

/// Seam between the contact use case and the outbound provider, so tests can
/// swap in a mock and assert on call counts.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_contact_email(&self, form: &ContactForm) -> Result<(), EmailError>;
}

/// Thin client for the Resend transactional-email API.
pub struct ResendClient {
    http: reqwest::Client,
    api_key: String,
}

impl ResendClient {
    pub fn new(api_key: String) -> Self {
        ResendClient {
            http: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send_contact_email(&self, form: &ContactForm) -> Result<(), EmailError> {
        let html = format!(
            "<h2>New Contact Form Submission</h2>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Message:</strong></p>\
             <p>{}</p>",
            form.name,
            form.email,
            form.message.replace('\n', "<br>")
        );

        let payload = serde_json::json!({
            "from": FROM_ADDRESS,
            "to": OWNER_INBOX,
            "subject": format!("Portfolio Contact: {}", form.name),
            "html": html,
            // Replies should reach the person who filled in the form, not
            // the fixed sender address.
            "reply_to": form.email,
        });

        let response = self
            .http
            .post(RESEND_ENDPOINT)
            .timeout(SEND_TIMEOUT)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailError::Provider { status, body });
        }

        Ok(())
    }
}

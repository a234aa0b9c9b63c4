use actix_http::Request;
use actix_web::{
    App,
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web,
};
use async_trait::async_trait;
use mockall::mock;
use serde_json::{Value, json};

use portfolio_api::{
    AppState,
    email::resend::{EmailError, EmailSender},
    entities::contact::ContactForm,
    routes::configure_routes,
};

mock! {
    pub Mailer {}

    #[async_trait]
    impl EmailSender for Mailer {
        async fn send_contact_email(&self, form: &ContactForm) -> Result<(), EmailError>;
    }
}

async fn spawn_app(
    mailer: Option<MockMailer>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::with_mailer(mailer)))
            .configure(configure_routes::<MockMailer>),
    )
    .await
}

fn contact_request(body: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/contact")
        .insert_header(("x-forwarded-for", "203.0.113.9"))
        .set_json(body)
}

fn valid_body() -> Value {
    json!({"name": "Ada", "email": "ada@example.com", "message": "Hello!"})
}

#[actix_web::test]
async fn valid_submission_returns_thank_you() {
    let mut mailer = MockMailer::new();
    mailer
        .expect_send_contact_email()
        .times(1)
        .returning(|_| Ok(()));
    let app = spawn_app(Some(mailer)).await;

    let resp = test::call_service(&app, contact_request(valid_body()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["message"],
        json!("Thank you for your message! I'll get back to you soon.")
    );
}

#[actix_web::test]
async fn empty_field_is_a_bad_request() {
    let app = spawn_app(Some(MockMailer::new())).await;

    let payload = json!({"name": "", "email": "a@b.com", "message": "hi"});
    let resp = test::call_service(&app, contact_request(payload).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("All fields are required"));
}

#[actix_web::test]
async fn malformed_email_is_a_bad_request() {
    let app = spawn_app(Some(MockMailer::new())).await;

    let payload = json!({"name": "A", "email": "not-an-email", "message": "hi"});
    let resp = test::call_service(&app, contact_request(payload).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Invalid email address"));
}

#[actix_web::test]
async fn missing_api_key_is_reported_without_outbound_calls() {
    // No mailer configured at all; a mock would panic if called, `None`
    // means there is nothing to call.
    let app = spawn_app(None).await;

    let resp = test::call_service(&app, contact_request(valid_body()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Email service is not configured"));
}

#[actix_web::test]
async fn provider_failure_is_sanitized() {
    let mut mailer = MockMailer::new();
    mailer.expect_send_contact_email().times(1).returning(|_| {
        Err(EmailError::Provider {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: "upstream exploded".to_string(),
        })
    });
    let app = spawn_app(Some(mailer)).await;

    let resp = test::call_service(&app, contact_request(valid_body()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        json!("Failed to send message. Please try again later.")
    );
    // The provider's response body stays in the server logs.
    assert!(!body.to_string().contains("upstream exploded"));
}

#[actix_web::test]
async fn unparseable_body_is_a_generic_failure() {
    let app = spawn_app(Some(MockMailer::new())).await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .insert_header(("x-forwarded-for", "203.0.113.9"))
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        json!("Failed to send message. Please try again later.")
    );
}

#[actix_web::test]
async fn fourth_request_in_window_is_rate_limited() {
    let mut mailer = MockMailer::new();
    mailer
        .expect_send_contact_email()
        .times(3)
        .returning(|_| Ok(()));
    let app = spawn_app(Some(mailer)).await;

    for _ in 0..3 {
        let resp = test::call_service(&app, contact_request(valid_body()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = test::call_service(&app, contact_request(valid_body()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        json!("Too many requests. Please try again in 60 minutes.")
    );
}

#[actix_web::test]
async fn rate_limit_is_keyed_by_client_identity() {
    let mut mailer = MockMailer::new();
    mailer.expect_send_contact_email().returning(|_| Ok(()));
    let app = spawn_app(Some(mailer)).await;

    for _ in 0..3 {
        let resp = test::call_service(&app, contact_request(valid_body()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    let resp = test::call_service(&app, contact_request(valid_body()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

    // A different forwarded address lands in a fresh bucket.
    let req = test::TestRequest::post()
        .uri("/api/contact")
        .insert_header(("x-forwarded-for", "198.51.100.7"))
        .set_json(valid_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn rejected_requests_do_not_consume_budget() {
    let mut mailer = MockMailer::new();
    mailer
        .expect_send_contact_email()
        .times(3)
        .returning(|_| Ok(()));
    let app = spawn_app(Some(mailer)).await;

    for _ in 0..3 {
        let resp = test::call_service(&app, contact_request(valid_body()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // Hammering after rejection keeps getting the same answer instead of
    // pushing the reset further out.
    for _ in 0..5 {
        let resp = test::call_service(&app, contact_request(valid_body()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            json!("Too many requests. Please try again in 60 minutes.")
        );
    }
}

#[actix_web::test]
async fn profile_document_is_served() {
    let app = spawn_app(Some(MockMailer::new())).await;

    let req = test::TestRequest::get().uri("/api/profile").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["profile"]["name"].is_string());
    assert!(body["experience"].as_array().is_some_and(|a| !a.is_empty()));
    assert!(body["projects"].as_array().is_some_and(|a| !a.is_empty()));
    assert!(body["skills"].as_array().is_some_and(|a| !a.is_empty()));
}

#[actix_web::test]
async fn health_endpoint_reports_status() {
    let app = spawn_app(Some(MockMailer::new())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
}

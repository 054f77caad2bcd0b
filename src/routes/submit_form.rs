use crate::domain::ContactSubmission;
use crate::email_client::EmailClient;
use crate::notification::{render, NotificationRecipient};
use crate::rate_limit::{Decision, RateLimiter};
use crate::routes::ApiResponse;
use crate::utils::error_chain_fmt;
use actix_web::http::header::RETRY_AFTER;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use chrono::Utc;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully! We will contact you soon.";
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";
pub const RATE_LIMIT_MESSAGE: &str = "Too many submissions from this IP, please try again later.";

/// The raw request body. Every field is optional at the serde level: "field is missing"
/// belongs to the validation rules (with their user-facing messages), not to the JSON
/// deserializer and its own idea of an error response.
#[derive(serde::Deserialize)]
pub struct SubmissionData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
}

impl TryFrom<SubmissionData> for ContactSubmission {
    type Error = String;

    /// The rules run in a fixed order - name, email, phone, subject - and the first failure
    /// wins. An absent field fails its own rule, same as an empty one.
    fn try_from(data: SubmissionData) -> Result<Self, Self::Error> {
        let name = crate::domain::SubmitterName::parse(data.name.unwrap_or_default())?;
        let email = crate::domain::SubmitterEmail::parse(data.email.unwrap_or_default())?;
        let phone = crate::domain::SubmitterPhone::parse(data.phone.unwrap_or_default())?;
        let subject = crate::domain::SubmitterSubject::parse(data.subject.unwrap_or_default())?;
        Ok(Self {
            name,
            email,
            phone,
            subject,
        })
    }
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(String),
    #[error("Failed to render the notification email")]
    Render(#[from] tera::Error),
    #[error("Failed to dispatch the notification email via the relay")]
    Relay(#[from] reqwest::Error),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmitError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitError::Validation(_) => StatusCode::BAD_REQUEST,
            SubmitError::Render(_) | SubmitError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // Validation reasons are user-correctable and surfaced verbatim.
            SubmitError::Validation(reason) => {
                HttpResponse::BadRequest().json(ApiResponse::failure(reason.clone()))
            }
            // Relay/render detail is logged server-side (via the `Debug` impl picked up by
            // the request logger), never exposed to the client.
            SubmitError::Render(_) | SubmitError::Relay(_) => {
                HttpResponse::InternalServerError().json(ApiResponse::failure(SERVER_ERROR_MESSAGE))
            }
        }
    }
}

/// The submission pipeline: rate limit, validate, render, dispatch.
///
/// Exactly one outbound message is dispatched on the success path; every other outcome
/// dispatches nothing. The relay call is awaited before the response is produced - the
/// client-side timeout on `EmailClient` bounds how long that can take.
#[tracing::instrument(name = "Handling a contact form submission", skip_all)]
pub async fn submit_form(
    request: HttpRequest,
    form: web::Json<SubmissionData>,
    email_client: web::Data<EmailClient>,
    rate_limiter: web::Data<RateLimiter>,
    recipient: web::Data<NotificationRecipient>,
) -> Result<HttpResponse, SubmitError> {
    let client_address = request.peer_addr().map(|addr| addr.ip().to_string());

    // The limiter must run before validation: a flooding client does not get to probe the
    // validation rules either.
    let limiter_key = client_address.as_deref().unwrap_or("unknown");
    if let Decision::Limited { retry_after } = rate_limiter.check(limiter_key) {
        tracing::warn!(client_address = %limiter_key, "Submission rejected by the rate limiter");
        return Ok(HttpResponse::TooManyRequests()
            .insert_header((RETRY_AFTER, retry_after.as_secs().to_string()))
            .json(ApiResponse::failure(RATE_LIMIT_MESSAGE)));
    }

    let submission = ContactSubmission::try_from(form.0).map_err(SubmitError::Validation)?;
    let notification = render(
        &submission,
        client_address.as_deref(),
        Utc::now(),
        &recipient.0,
    )?;
    email_client.send_email(&notification).await?;

    tracing::info!(
        submitter_name = %submission.name.as_ref(),
        submitter_email = %submission.email.as_ref(),
        "New contact form submission dispatched"
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(SUCCESS_MESSAGE)))
}

use crate::domain::SubmitterEmail;
use crate::notification::NotificationEmail;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// Client for the outbound mail relay's HTTP API.
///
/// Holds a connection pool under the hood (cheap to clone, internally synchronized), so a
/// single instance is built at startup and shared across all request handlers.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: SubmitterEmail,
    authorization_token: Secret<String>,
}

impl EmailClient {
    /// Construction is fallible: a misconfigured relay should surface at boot, not on the
    /// first submission that tries to send.
    pub fn new(
        base_url: String,
        sender: SubmitterEmail,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        // The timeout applies to the whole request, from connection to the last body byte.
        // Without it a hung mail transport would stall the submission handler indefinitely.
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        })
    }

    /// Dispatches one notification. A single attempt, fail-fast: the caller decides what a
    /// failure means, no retries happen here.
    pub async fn send_email(&self, email: &NotificationEmail) -> Result<(), reqwest::Error> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: &email.recipient,
            reply_to: &email.reply_to,
            subject: &email.subject_line,
            html_body: &email.html_body,
        };
        self.http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Using a lifetime parameter lets us borrow the rendered notification instead of cloning
/// four strings for every dispatch.
#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    html_body: &'a str,
}

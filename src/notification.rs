use crate::domain::{ContactSubmission, SubmitterEmail};
use chrono::{DateTime, FixedOffset, Utc};
use once_cell::sync::Lazy;
use tera::{Context, Tera};

/// The inbox that receives form notifications, resolved once at startup.
pub struct NotificationRecipient(pub SubmitterEmail);

/// A fully rendered notification, ready to hand to the relay client.
#[derive(Debug)]
pub struct NotificationEmail {
    pub recipient: String,
    pub reply_to: String,
    pub subject_line: String,
    pub html_body: String,
}

// Submission timestamps are rendered in Indian Standard Time, matching the locale of the
// inbox that reads these notifications.
const IST_UTC_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

static IST: Lazy<FixedOffset> =
    Lazy::new(|| FixedOffset::east_opt(IST_UTC_OFFSET_SECONDS).expect("IST offset is in range"));

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    // Auto-escaping is what stands between a hostile form field and script injection into
    // the notification body - it must stay enabled for this template.
    tera.autoescape_on(vec![".html"]);
    tera.add_raw_template("notification.html", NOTIFICATION_TEMPLATE)
        .expect("Failed to register the notification template");
    tera
});

const NOTIFICATION_TEMPLATE: &str = r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333; border-bottom: 2px solid #00bcd4; padding-bottom: 10px;">
    New Contact Form Submission
  </h2>

  <div style="background-color: #f9f9f9; padding: 20px; border-radius: 5px; margin: 20px 0;">
    <h3 style="color: #555; margin-top: 0;">Contact Details:</h3>

    <p><strong>Name:</strong> {{ name }}</p>
    <p><strong>Email:</strong> {{ email }}</p>
    <p><strong>Phone:</strong> {{ phone }}</p>
    <p><strong>Subject:</strong> {{ subject }}</p>

    <hr style="border: none; border-top: 1px solid #ddd; margin: 20px 0;">

    <p style="color: #666; font-size: 12px;">
      <strong>Submission Time:</strong> {{ submitted_at }}
    </p>
    <p style="color: #666; font-size: 12px;">
      <strong>IP Address:</strong> {{ client_address }}
    </p>
  </div>

  <div style="background-color: #e8f5e8; padding: 15px; border-radius: 5px; border-left: 4px solid #4caf50;">
    <p style="margin: 0; color: #2e7d32;">
      <strong>Action Required:</strong> Please respond to this inquiry within 24 hours.
    </p>
  </div>
</div>
"#;

/// Renders the notification email for a validated submission.
///
/// Deterministic: the same submission, client address and timestamp always produce
/// byte-identical output. The four user-provided fields are entity-encoded by the template
/// engine before they are embedded in markup; values placed into mail headers (the subject
/// line and the reply-to address) additionally have control characters stripped, so a form
/// field cannot smuggle extra headers into the outgoing message.
pub fn render(
    submission: &ContactSubmission,
    client_address: Option<&str>,
    submitted_at: DateTime<Utc>,
    recipient: &SubmitterEmail,
) -> Result<NotificationEmail, tera::Error> {
    let mut context = Context::new();
    context.insert("name", submission.name.as_ref());
    context.insert("email", submission.email.as_ref());
    context.insert("phone", submission.phone.as_ref());
    context.insert("subject", submission.subject.as_ref());
    context.insert("submitted_at", &format_submission_time(submitted_at));
    context.insert("client_address", client_address.unwrap_or("Unknown"));
    let html_body = TEMPLATES.render("notification.html", &context)?;

    let subject_line = sanitize_header_value(&format!(
        "New Contact Form: {} - from {}",
        submission.subject.as_ref(),
        submission.name.as_ref()
    ));

    Ok(NotificationEmail {
        recipient: recipient.as_ref().to_owned(),
        reply_to: sanitize_header_value(submission.email.as_ref()),
        subject_line,
        html_body,
    })
}

fn format_submission_time(submitted_at: DateTime<Utc>) -> String {
    format!(
        "{} IST",
        submitted_at
            .with_timezone(&*IST)
            .format("%-d/%-m/%Y, %-I:%M:%S %P")
    )
}

/// CR/LF (or any other control character) in a header value would let a submitter inject
/// additional headers into the outgoing message.
fn sanitize_header_value(value: &str) -> String {
    value.chars().filter(|c| !c.is_control()).collect()
}

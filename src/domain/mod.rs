mod contact_submission;
mod submitter_email;
mod submitter_name;
mod submitter_phone;
mod submitter_subject;

pub use contact_submission::ContactSubmission;
pub use submitter_email::SubmitterEmail;
pub use submitter_name::SubmitterName;
pub use submitter_phone::SubmitterPhone;
pub use submitter_subject::SubmitterSubject;

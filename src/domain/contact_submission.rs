use crate::domain::{SubmitterEmail, SubmitterName, SubmitterPhone, SubmitterSubject};

/// A contact-form submission whose four fields have all passed validation.
///
/// # Type Driven Development
/// Making an incorrect usage pattern unrepresentable, by construction, is known as *type driven
/// development*. Each field is a new-type that can only be obtained through its `parse` method,
/// so holding a `ContactSubmission` is proof that validation has already happened - the
/// notification renderer cannot be reached with unvalidated data.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub phone: SubmitterPhone,
    pub subject: SubmitterSubject,
}

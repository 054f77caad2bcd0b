#[derive(Debug, Clone)]
pub struct SubmitterSubject(String);

impl SubmitterSubject {
    /// Returns an instance of `SubmitterSubject` if the input is non-empty after trimming.
    pub fn parse(s: String) -> Result<SubmitterSubject, String> {
        if s.trim().is_empty() {
            Err("Please select a subject".into())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for SubmitterSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

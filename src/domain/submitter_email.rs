#[derive(Debug, Clone)]
pub struct SubmitterEmail(String);

impl SubmitterEmail {
    /// Returns an instance of `SubmitterEmail` if the input has the minimal syntactic shape of
    /// an email address: something before an `@`, something after it, and a dot somewhere in the
    /// middle of the part after the `@`.
    ///
    /// This is deliberately *not* full RFC 5322 validation: the address is only ever used as a
    /// reply-to hint for a human recipient, so a cheap shape check is all we need.
    pub fn parse(s: String) -> Result<SubmitterEmail, String> {
        if is_valid_email_shape(&s) {
            Ok(Self(s))
        } else {
            Err("Please provide a valid email address".into())
        }
    }
}

fn is_valid_email_shape(s: &str) -> bool {
    // Whitespace is forbidden anywhere in the address.
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    // Exactly one `@`, with a non-empty local part in front of it.
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain must contain a dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmitterEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // We just forward to the Display implementation of the wrapped String.
        self.0.fmt(f)
    }
}

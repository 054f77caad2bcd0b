#[derive(Debug, Clone)]
pub struct SubmitterPhone(String);

impl SubmitterPhone {
    /// Returns an instance of `SubmitterPhone` if the input looks like a phone number: only
    /// digits, `+`, `-`, parentheses and whitespace, with a total length of 10 to 15 characters.
    ///
    /// The input is checked as-is, without trimming: surrounding whitespace counts towards the
    /// length like any other formatting character.
    pub fn parse(s: String) -> Result<SubmitterPhone, String> {
        let has_valid_characters = s
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '(' | ')'));
        let has_valid_length = (10..=15).contains(&s.chars().count());

        if has_valid_characters && has_valid_length {
            Ok(Self(s))
        } else {
            Err("Please provide a valid phone number".into())
        }
    }
}

impl AsRef<str> for SubmitterPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct SubmitterName(String);

impl SubmitterName {
    /// Returns an instance of `SubmitterName` if the input satisfies our validation constraint
    /// on submitter names: at least two characters once leading/trailing whitespace is removed.
    ///
    /// The original input is preserved untrimmed; trimming only applies to the length check.
    pub fn parse(s: String) -> Result<SubmitterName, String> {
        // A grapheme is defined by the Unicode standard as a "user-perceived" character: `a̐` is a
        // single grapheme, but it is composed of two characters (`a` and `̐`).
        //
        // `graphemes` returns an iterator over the graphemes in the input. `true` specifies that
        // we want to use the extended grapheme definition set, the recommended one.
        let is_too_short = s.trim().graphemes(true).count() < 2;

        if is_too_short {
            Err("Name must be at least 2 characters long".into())
        } else {
            Ok(Self(s))
        }
    }
}

/// The caller gets a shared reference to the inner string. This gives the caller **read-only**
/// access, they have no way to compromise our invariants!
impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

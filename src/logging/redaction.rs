//! Redaction of secrets in debug/trace output

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

pub const REDACTED: &str = "[REDACTED]";

static REDACTION_PATTERNS: LazyLock<Vec<RedactionPattern>> = LazyLock::new(|| {
    vec![
        // Okta API token header
        RedactionPattern::new(r"(?i)(Authorization:\s*SSWS\s+)\S+", |caps| {
            format!("{}{REDACTED}", &caps[1])
        }),
        RedactionPattern::new(r"(?i)(Authorization:\s*Bearer\s+)\S+", |caps| {
            format!("{}{REDACTED}", &caps[1])
        }),
        RedactionPattern::new(r#"("password"\s*:\s*")[^"]*""#, |caps| {
            format!("{}{REDACTED}\"", &caps[1])
        }),
        // Password object form: "password": {"value": "..."}
        RedactionPattern::new(r#"("password"\s*:\s*\{\s*"value"\s*:\s*")[^"]*""#, |caps| {
            format!("{}{REDACTED}\"", &caps[1])
        }),
        // One-time reset links carry a token in the path
        RedactionPattern::new(r#"("resetPasswordUrl"\s*:\s*")[^"]*""#, |caps| {
            format!("{}{REDACTED}\"", &caps[1])
        }),
        // user:password@host
        RedactionPattern::new(r"(://[^:/\s]+:)[^@\s/]+(@)", |caps| {
            format!("{}{REDACTED}{}", &caps[1], &caps[2])
        }),
    ]
});

struct RedactionPattern {
    regex: Regex,
    replacer: Box<dyn Fn(&regex::Captures) -> String + Send + Sync>,
}

impl RedactionPattern {
    fn new<F>(pattern: &str, replacer: F) -> Self
    where
        F: Fn(&regex::Captures) -> String + Send + Sync + 'static,
    {
        Self {
            regex: Regex::new(pattern).expect("Invalid redaction pattern"),
            replacer: Box::new(replacer),
        }
    }

    fn apply(&self, input: &str) -> Option<String> {
        if !self.regex.is_match(input) {
            return None;
        }
        let replaced = self
            .regex
            .replace_all(input, |caps: &regex::Captures| (self.replacer)(caps));
        Some(replaced.into_owned())
    }
}

/// Masks tokens, passwords and URL credentials
#[derive(Debug, Default, Clone, Copy)]
pub struct Redactor;

impl Redactor {
    pub fn new() -> Self {
        Self
    }

    /// Apply every pattern; borrows the input when nothing matched
    pub fn redact<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let mut result: Cow<'a, str> = Cow::Borrowed(input);

        for pattern in REDACTION_PATTERNS.iter() {
            if let Some(replaced) = pattern.apply(&result) {
                result = Cow::Owned(replaced);
            }
        }

        result
    }
}

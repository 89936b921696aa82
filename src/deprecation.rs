//! Deprecation records for renamed option keys.
//!
//! A [`Deprecation`] is the immutable rule "key X is now key Y", optionally
//! carrying a removal deadline as either a calendar date or a version string.
//! The record renders its own warning text; the exact wording and newline
//! placement are part of the crate's external contract.

use chrono::NaiveDate;

/// Deadline after which a deprecated key will stop being honored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Removal {
    /// No deadline announced yet.
    #[default]
    Unscheduled,
    /// Removed on or after the given release.
    Version(String),
    /// Removed on or after the given date.
    Date(NaiveDate),
}

impl Removal {
    /// Deadline on the first day of `year`/`month`.
    ///
    /// Returns `None` for an out-of-range month.
    pub fn first_of(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Removal::Date)
    }

    /// The "It will be removed ..." clause, date taking priority over
    /// version.
    fn clause(&self) -> String {
        match self {
            Removal::Date(date) => format!("on or after {}", date.format("%Y-%m-%d")),
            Removal::Version(version) => format!("on or after version {version}"),
            Removal::Unscheduled => "in a future version".to_string(),
        }
    }
}

/// A deprecated option key and its replacement.
///
/// # Example
///
/// ```
/// use optioning::{Deprecation, Removal};
///
/// let deprecation = Deprecation::new("to_hash", "to", Removal::Version("v2.0.0".into()));
/// assert_eq!(
///     deprecation.message(),
///     "NOTE: option `:to_hash` is deprecated; use `:to` instead. \
///      It will be removed on or after version v2.0.0.\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Deprecation {
    option: String,
    replacement: String,
    removal: Removal,
    call_site: Option<String>,
}

impl Deprecation {
    /// Create a rule renaming `option` to `replacement`.
    pub fn new(
        option: impl Into<String>,
        replacement: impl Into<String>,
        removal: Removal,
    ) -> Self {
        Self {
            option: option.into(),
            replacement: replacement.into(),
            removal,
            call_site: None,
        }
    }

    /// The deprecated key.
    pub fn option(&self) -> &str {
        &self.option
    }

    /// The key callers should use instead.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// The announced removal deadline.
    pub fn removal(&self) -> &Removal {
        &self.removal
    }

    /// Attach the call site the warning should point at. Set per diagnostic
    /// pass, just before the message is rendered.
    pub fn set_call_site(&mut self, call_site: impl Into<String>) {
        self.call_site = Some(call_site.into());
    }

    /// The full warning text for this rule, newline-terminated.
    pub fn message(&self) -> String {
        let mut message = format!(
            "NOTE: option `:{}` is deprecated; use `:{}` instead. It will be removed {}.",
            self.option,
            self.replacement,
            self.removal.clause()
        );
        if let Some(call_site) = &self.call_site {
            message.push_str(&format!("\nCalled from {call_site}."));
        }
        message.push('\n');
        message
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

/// `YYYY-MM-DD` anywhere in a filename
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("date pattern is valid"));

/// A single markdown file treated as one index entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    filepath: String,
    category: String,
    title: String,
    created_at: String,
}

impl Note {
    /// Build a note from its category directory, filename and raw title.
    ///
    /// The link path is always `category/filename`, independent of how deep
    /// the file actually sits below the root.
    pub fn new(
        category: impl Into<String>,
        filename: impl AsRef<str>,
        title: impl Into<String>,
    ) -> Self {
        let category = category.into();
        let filename = filename.as_ref();

        Self {
            filepath: format!("{}/{}", category, filename),
            created_at: extract_date(filename),
            category,
            title: title.into(),
        }
    }

    pub fn filepath(&self) -> &str {
        &self.filepath
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Date taken from the filename, or an empty string
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn has_date(&self) -> bool {
        !self.created_at.is_empty()
    }
}

/// First `YYYY-MM-DD` match in a filename, empty when there is none.
///
/// No calendar validation: `2023-13-45` is returned as-is.
pub fn extract_date(filename: &str) -> String {
    DATE_PATTERN
        .find(filename)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Strip `#` markers from both ends of the raw line, then surrounding
/// whitespace.
///
/// `first_line` still carries its line terminator, so trailing `#` is only
/// removed when the title is the last line and has no newline.
pub fn parse_title(first_line: &str) -> String {
    first_line.trim_matches('#').trim().to_string()
}

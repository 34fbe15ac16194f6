//! Name records and collection payload decoding.
//!
//! A [`NameRecord`] is one entry of the remote `names` collection. Records are
//! addressed by the server-assigned numeric [`NameId`]; the name text itself is
//! never used as an identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display format for creation timestamps.
const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Server-assigned identity of a name record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameId(pub u64);

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the names collection, as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub id: NameId,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl NameRecord {
    /// Returns the name with control characters escaped.
    ///
    /// Names come from the server verbatim; escaping keeps an embedded escape
    /// sequence from being interpreted by the terminal.
    ///
    /// ```
    /// use names_panel::domain::{NameId, NameRecord};
    ///
    /// let record = NameRecord { id: NameId(1), name: "a\u{1b}[2Jb".into(), created_at: None };
    /// assert_eq!(record.display_name(), "a\\u{1b}[2Jb");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        escape_control(&self.name)
    }

    /// Formats `created_at` for display.
    ///
    /// Accepts RFC 3339 timestamps (converted to local time) and naive ISO 8601
    /// timestamps with or without fractional seconds. Unparseable values are
    /// shown as sent.
    #[must_use]
    pub fn created_at_display(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(
                dt.with_timezone(&chrono::Local)
                    .format(TIMESTAMP_DISPLAY_FORMAT)
                    .to_string(),
            );
        }

        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| chrono::NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map_or_else(
                || Some(raw.to_string()),
                |dt| Some(dt.format(TIMESTAMP_DISPLAY_FORMAT).to_string()),
            )
    }
}

/// Accepted shapes of a `GET /names` response body.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CollectionPayload {
    Wrapped { names: Vec<NameRecord> },
    Bare(Vec<NameRecord>),
}

/// Escapes control characters in server-supplied text before it reaches the
/// terminal.
///
/// ```
/// use names_panel::domain::escape_control;
///
/// assert_eq!(escape_control("bad\u{1b}[31m name"), "bad\\u{1b}[31m name");
/// assert_eq!(escape_control("Zoë"), "Zoë");
/// ```
#[must_use]
pub fn escape_control(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

/// Decodes a collection response body.
///
/// Both `{"names": [...]}` and a bare array of records are accepted. Order is
/// preserved exactly as sent.
///
/// # Errors
///
/// Returns the JSON error if the body matches neither shape.
pub fn decode_collection(body: &str) -> Result<Vec<NameRecord>, serde_json::Error> {
    let payload: CollectionPayload = serde_json::from_str(body)?;
    Ok(match payload {
        CollectionPayload::Wrapped { names } => names,
        CollectionPayload::Bare(names) => names,
    })
}

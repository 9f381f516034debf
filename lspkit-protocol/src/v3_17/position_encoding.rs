//! Position encodings
//!
//! The client lists the encodings it supports in
//! `general.positionEncodings`; the server picks one and reports it as
//! `positionEncoding` in its `initialize` result. Either side leaving the
//! field out means UTF-16. The value is carried as an open string so that
//! encodings added by later revisions still decode.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionEncodingKind(Cow<'static, str>);

impl PositionEncodingKind {
    /// Character offsets count UTF-8 code units (bytes)
    pub const UTF8: Self = Self(Cow::Borrowed("utf-8"));

    /// Character offsets count UTF-16 code units, the protocol default
    pub const UTF16: Self = Self(Cow::Borrowed("utf-16"));

    /// Character offsets count UTF-32 code units (code points)
    pub const UTF32: Self = Self(Cow::Borrowed("utf-32"));

    pub fn new(kind: impl Into<Cow<'static, str>>) -> Self {
        Self(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the three encodings the protocol defines
    pub fn is_predefined(&self) -> bool {
        [Self::UTF8, Self::UTF16, Self::UTF32].contains(self)
    }

    /// The encoding in effect when the announcing side may have left the
    /// field out
    pub fn effective(announced: Option<&PositionEncodingKind>) -> PositionEncodingKind {
        announced.cloned().unwrap_or_default()
    }
}

impl Default for PositionEncodingKind {
    fn default() -> Self {
        Self::UTF16
    }
}

impl fmt::Display for PositionEncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for PositionEncodingKind {
    fn from(kind: &'static str) -> Self {
        Self(Cow::Borrowed(kind))
    }
}

impl From<String> for PositionEncodingKind {
    fn from(kind: String) -> Self {
        Self(Cow::Owned(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_values() {
        assert_eq!(serde_json::to_value(PositionEncodingKind::UTF8).unwrap(), json!("utf-8"));
        assert_eq!(serde_json::to_value(PositionEncodingKind::UTF16).unwrap(), json!("utf-16"));
        assert_eq!(serde_json::to_value(PositionEncodingKind::UTF32).unwrap(), json!("utf-32"));

        let kind: PositionEncodingKind = serde_json::from_value(json!("utf-32")).unwrap();
        assert_eq!(kind, PositionEncodingKind::UTF32);
        assert!(kind.is_predefined());
    }

    #[test]
    fn test_unknown_encoding_is_kept() {
        let kind: PositionEncodingKind = serde_json::from_value(json!("wtf-8")).unwrap();
        assert_eq!(kind.as_str(), "wtf-8");
        assert!(!kind.is_predefined());
        assert!(serde_json::from_value::<PositionEncodingKind>(json!(8)).is_err());
    }

    #[test]
    fn test_absent_means_utf16() {
        assert_eq!(PositionEncodingKind::effective(None), PositionEncodingKind::UTF16);
        assert_eq!(
            PositionEncodingKind::effective(Some(&PositionEncodingKind::UTF8)),
            PositionEncodingKind::UTF8
        );
        assert_eq!(PositionEncodingKind::default().to_string(), "utf-16");
    }
}

//! Shape traits shared by every protocol record
//!
//! Two kinds of composite value appear in the protocol:
//!
//! - **Untagged unions** ([`TrialDecode`]): a field that may hold one of
//!   several shapes (`boolean | HoverOptions`, `string | MarkupContent`, ...)
//!   with nothing on the wire saying which. The union's variant catalog lists
//!   the candidate shapes in the order they are tried.
//! - **Aggregates** ([`Aggregate`]): records whose fields are decoded one by
//!   one through a [`FieldReader`], applying the trial decoder to each
//!   ambiguous field independently.
//!
//! Both are normally derived with `#[derive(TrialDecode)]` and
//! `#[derive(Aggregate)]`.

use crate::codec::FieldReader;
use crate::error::Result;
use serde_json::Value;
use std::fmt;

/// Decoder for a single candidate shape
///
/// Must be a plain function pointer so catalogs can live in `const` slices.
pub type Probe<T> = fn(&Value) -> std::result::Result<T, serde_json::Error>;

/// One entry of a variant catalog
pub struct Candidate<T: 'static> {
    /// Variant name, reported in trace events and mismatch errors
    pub name: &'static str,
    /// Strict structural decode into this variant
    pub probe: Probe<T>,
}

impl<T> Candidate<T> {
    /// Create a catalog entry
    pub const fn new(name: &'static str, probe: Probe<T>) -> Self {
        Self { name, probe }
    }
}

impl<T> Clone for Candidate<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Candidate<T> {}

impl<T> fmt::Debug for Candidate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate").field("name", &self.name).finish()
    }
}

/// An untagged union decoded by structural trial
///
/// `CANDIDATES` is tried front to back and the first shape that decodes wins.
/// Order matters whenever two shapes accept the same input: an empty object
/// satisfies every optional-only record, so such records must come after the
/// more constrained ones.
///
/// # Examples
///
/// ```rust
/// use lspkit_core::{codec, TrialDecode};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Deserialize, Serialize)]
/// struct FoldingOptions {
///     #[serde(rename = "workDoneProgress")]
///     work_done_progress: Option<bool>,
/// }
///
/// #[derive(Debug, TrialDecode)]
/// enum FoldingProvider {
///     Bool(bool),
///     Options(FoldingOptions),
/// }
///
/// let raw = serde_json::json!({"workDoneProgress": true});
/// let decoded: FoldingProvider = codec::trial_decode(&raw).unwrap();
/// assert_eq!(decoded.variant(), "Options");
/// assert_eq!(FoldingProvider::candidate_names(), vec!["Bool", "Options"]);
/// ```
pub trait TrialDecode: Sized + 'static {
    /// Name of the union, used in diagnostics
    const UNION: &'static str;

    /// Ordered variant catalog
    const CANDIDATES: &'static [Candidate<Self>];

    /// Name of the active variant
    fn variant(&self) -> &'static str;

    /// Variant names in trial order
    fn candidate_names() -> Vec<&'static str> {
        Self::CANDIDATES.iter().map(|c| c.name).collect()
    }
}

/// A record decoded field by field from one JSON object
///
/// Implementations read every field through the [`FieldReader`]; a record
/// that extends an earlier protocol revision reads the base record from the
/// same reader with [`FieldReader::layer`].
pub trait Aggregate: Sized {
    /// Decode from the fields of one object
    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self>;
}

/// JSON kind of a value, as used in diagnostics
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(true)), "boolean");
        assert_eq!(json_kind(&json!(3)), "number");
        assert_eq!(json_kind(&json!("utf-16")), "string");
        assert_eq!(json_kind(&json!([])), "array");
        assert_eq!(json_kind(&json!({})), "object");
    }

    #[test]
    fn test_candidate_debug_shows_name() {
        fn probe(raw: &Value) -> std::result::Result<bool, serde_json::Error> {
            serde_json::from_value(raw.clone())
        }
        let candidate = Candidate::new("Bool", probe);
        assert_eq!(format!("{:?}", candidate), r#"Candidate { name: "Bool" }"#);
    }
}

//! Trial decoder, aggregate decoder and encoder
//!
//! # Trial Decoding
//!
//! [`trial_decode`] resolves an untagged union. It walks the union's variant
//! catalog in declared order, runs a strict structural decode for each
//! candidate and returns the first one that succeeds:
//!
//! ```text
//! raw ──► Bool? ──no──► RegistrationOptions? ──no──► Options? ──yes──► Options(..)
//! ```
//!
//! "Strict" here means required keys must be present and type-correct;
//! unknown keys are ignored. When every candidate fails the result is a
//! [`ShapeMismatch`] carrying the last candidate's error.
//!
//! # Aggregate Decoding
//!
//! [`decode`] turns one JSON object into an [`Aggregate`]. Each field is read
//! through a [`FieldReader`]:
//!
//! | reader call        | key missing / `null` | wrong shape            |
//! |--------------------|----------------------|------------------------|
//! | `optional`         | `None`               | `MalformedPrimitive`   |
//! | `required`         | `MissingField`       | `MalformedPrimitive`   |
//! | `ambiguous`        | `None`               | `ShapeMismatch`        |
//! | `nested`           | `None`               | error of the inner record |
//!
//! A required field that the protocol allows to be `null` is declared as
//! `Option<T>` and read with `required`: the key must exist, `null` is kept.
//!
//! Opaque `LSPAny` slots (`data` on inlay hints and type hierarchy items)
//! follow the same table, so `"data": null` reads as absent and is omitted on
//! re-encode. A server that wants to tell "no payload" from "null payload"
//! has to put a non-null marker in the slot.
//!
//! Any field error fails the whole aggregate; there are no partial results.
//!
//! # Encoding
//!
//! Encoding is selection rather than search: each union serializes its one
//! active variant, so [`encode_object`] is plain serde serialization plus a
//! check that the result is an object.
//!
//! # Examples
//!
//! ```rust
//! use lspkit_core::{codec, Aggregate, Error, TrialDecode};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Deserialize, Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct HoverOptions {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     work_done_progress: Option<bool>,
//! }
//!
//! #[derive(Debug, TrialDecode)]
//! enum HoverProvider {
//!     Bool(bool),
//!     Options(HoverOptions),
//! }
//!
//! #[derive(Debug, Serialize, Aggregate)]
//! #[serde(rename_all = "camelCase")]
//! struct Capabilities {
//!     #[wire(ambiguous)]
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     hover_provider: Option<HoverProvider>,
//! }
//!
//! let raw = serde_json::json!({"hoverProvider": {"workDoneProgress": true}});
//! let caps: Capabilities = codec::decode(&raw).unwrap();
//! assert_eq!(caps.hover_provider.as_ref().map(|p| p.variant()), Some("Options"));
//! assert_eq!(serde_json::Value::Object(codec::encode_object(&caps).unwrap()), raw);
//!
//! let bad = serde_json::json!({"hoverProvider": 3});
//! assert!(matches!(codec::decode::<Capabilities>(&bad), Err(Error::ShapeMismatch { .. })));
//! ```

use crate::error::{Error, ResponseError, Result, ShapeMismatch};
use crate::types::{json_kind, Aggregate, TrialDecode};
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resolve an untagged union by trying its candidates in catalog order
///
/// Absence is the caller's business: this function is only handed values
/// that are present. Each attempt is logged at TRACE level.
///
/// # Errors
///
/// Returns [`ShapeMismatch`] when no candidate decodes `raw`.
pub fn trial_decode<U: TrialDecode>(raw: &Value) -> std::result::Result<U, ShapeMismatch> {
    let mut last_failure = None;

    for candidate in U::CANDIDATES {
        match (candidate.probe)(raw) {
            Ok(value) => {
                tracing::trace!(union = U::UNION, candidate = candidate.name, "candidate accepted");
                return Ok(value);
            }
            Err(e) => {
                tracing::trace!(
                    union = U::UNION,
                    candidate = candidate.name,
                    error = %e,
                    "candidate rejected"
                );
                last_failure = Some((candidate.name, e.to_string()));
            }
        }
    }

    let (candidate, message) =
        last_failure.unwrap_or(("<none>", "variant catalog is empty".to_string()));

    let mismatch = ShapeMismatch {
        union: U::UNION,
        candidate,
        attempts: U::CANDIDATES.len(),
        found: json_kind(raw),
        message,
    };

    tracing::debug!(
        union = mismatch.union,
        found = mismatch.found,
        attempts = mismatch.attempts,
        "no candidate shape matched"
    );

    Err(mismatch)
}

/// Strict decode of `raw` as `S`, wrapped into a union variant
///
/// This is the body of every derived catalog entry.
pub fn probe<S, U>(raw: &Value, wrap: fn(S) -> U) -> std::result::Result<U, serde_json::Error>
where
    S: DeserializeOwned,
{
    S::deserialize(raw).map(wrap)
}

/// Field-by-field view of one JSON object
///
/// Carries the dotted wire path of the object so that errors raised deep in
/// a nested record name the full path, e.g. `capabilities.textDocument`.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    path: String,
}

impl<'a> FieldReader<'a> {
    /// Reader over a root object
    pub fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            path: String::new(),
        }
    }

    /// Dotted path of this object (empty for the root)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the key is present, `null` included
    pub fn contains(&self, key: &str) -> bool {
        self.object.contains_key(key)
    }

    fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|v| !v.is_null())
    }

    fn plain<T: DeserializeOwned>(&self, key: &str, raw: &Value) -> Result<T> {
        T::deserialize(raw).map_err(|e| Error::MalformedPrimitive {
            field: self.field_path(key),
            message: e.to_string(),
        })
    }

    fn trial<U: TrialDecode>(&self, key: &str, raw: &Value) -> Result<U> {
        trial_decode(raw).map_err(|source| Error::ShapeMismatch {
            field: self.field_path(key),
            source,
        })
    }

    fn missing(&self, key: &str) -> Error {
        Error::MissingField {
            field: self.field_path(key),
        }
    }

    /// Optional single-shape field
    pub fn optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.present(key).map(|raw| self.plain(key, raw)).transpose()
    }

    /// Required single-shape field
    ///
    /// The raw value is handed to `T` even when it is `null`, so a required
    /// but nullable field is declared as `Option<_>`.
    pub fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        match self.object.get(key) {
            Some(raw) => self.plain(key, raw),
            None => Err(self.missing(key)),
        }
    }

    /// Optional ambiguous field, resolved by trial
    pub fn ambiguous<U: TrialDecode>(&self, key: &str) -> Result<Option<U>> {
        self.present(key).map(|raw| self.trial(key, raw)).transpose()
    }

    /// Required ambiguous field, resolved by trial
    pub fn required_ambiguous<U: TrialDecode>(&self, key: &str) -> Result<U> {
        match self.present(key) {
            Some(raw) => self.trial(key, raw),
            None => Err(self.missing(key)),
        }
    }

    /// Optional nested aggregate
    pub fn nested<A: Aggregate>(&self, key: &str) -> Result<Option<A>> {
        self.present(key)
            .map(|raw| decode_at(raw, self.field_path(key)))
            .transpose()
    }

    /// Required nested aggregate
    pub fn required_nested<A: Aggregate>(&self, key: &str) -> Result<A> {
        match self.present(key) {
            Some(raw) => decode_at(raw, self.field_path(key)),
            None => Err(self.missing(key)),
        }
    }

    /// Decode an earlier revision's record from this same object
    ///
    /// Used by records that extend a base record with new fields: base and
    /// delta share one flat wire object.
    pub fn layer<A: Aggregate>(&self) -> Result<A> {
        A::decode_fields(self)
    }

    /// Decode a serde record from this same object
    ///
    /// The counterpart of [`FieldReader::layer`] for base records that are
    /// plain serde types rather than aggregates.
    pub fn flatten<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(Value::Object(self.object.clone())).map_err(|e| {
            Error::MalformedPrimitive {
                field: self.path.clone(),
                message: e.to_string(),
            }
        })
    }
}

fn decode_at<A: Aggregate>(raw: &Value, path: String) -> Result<A> {
    match raw {
        Value::Object(object) => A::decode_fields(&FieldReader { object, path }),
        other => Err(Error::NotAnObject {
            path,
            found: json_kind(other),
        }),
    }
}

/// Decode an aggregate from a JSON value
///
/// # Errors
///
/// - `NotAnObject` if `raw` is not an object
/// - `MissingField`, `MalformedPrimitive` or `ShapeMismatch` from any field
pub fn decode<A: Aggregate>(raw: &Value) -> Result<A> {
    decode_at(raw, String::new())
}

/// Parse JSON text and decode an aggregate from it
///
/// Text that is not JSON at all maps to a parse error (-32700).
pub fn decode_str<A: Aggregate>(data: &str) -> Result<A> {
    let value: Value =
        serde_json::from_str(data).map_err(|_e| Error::Response(ResponseError::parse_error()))?;
    decode(&value)
}

/// Decode JSON text into any serde type
pub fn decode_as<T: DeserializeOwned>(data: &str) -> Result<T> {
    serde_json::from_str(data).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decode a JSON value into any serde type
///
/// Aggregates and unions route through their derived `Deserialize` impls, so
/// the trial decoder still applies; only the structured error is flattened
/// into a message.
pub fn from_value<T: DeserializeOwned>(raw: &Value) -> Result<T> {
    T::deserialize(raw).map_err(|e| Error::Serialization(e.to_string()))
}

/// Encode a value to a JSON value
pub fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| Error::Serialization(e.to_string()))
}

/// Encode a record to its wire object
///
/// Absent optional fields are omitted. Every union field emits exactly the
/// shape of its active variant.
///
/// # Errors
///
/// `Serialization` if the value does not encode to a JSON object.
pub fn encode_object<T: Serialize>(value: &T) -> Result<Map<String, Value>> {
    match to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::Serialization(format!(
            "expected a JSON object, encoded {}",
            json_kind(&other)
        ))),
    }
}

/// Encode any serializable value to JSON text
pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::Serialization(e.to_string()))
}

/// serde entry point for union types
///
/// Derived `Deserialize` impls of `#[derive(TrialDecode)]` enums call this.
pub fn deserialize_union<'de, U, D>(deserializer: D) -> std::result::Result<U, D::Error>
where
    U: TrialDecode,
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    trial_decode(&raw).map_err(serde::de::Error::custom)
}

/// serde entry point for aggregate types
///
/// Derived `Deserialize` impls of `#[derive(Aggregate)]` records call this.
pub fn deserialize_aggregate<'de, A, D>(deserializer: D) -> std::result::Result<A, D::Error>
where
    A: Aggregate,
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    decode(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Candidate;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct WorkOptions {
        #[serde(skip_serializing_if = "Option::is_none")]
        work_done_progress: Option<bool>,
    }

    #[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct ResolveOptions {
        #[serde(skip_serializing_if = "Option::is_none")]
        resolve_provider: Option<bool>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct SelectorOptions {
        document_selector: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    }

    // `documentSelector` must be present, even as null
    impl Aggregate for SelectorOptions {
        fn decode_fields(fields: &FieldReader<'_>) -> Result<Self> {
            Ok(Self {
                document_selector: fields.required("documentSelector")?,
                id: fields.optional("id")?,
            })
        }
    }

    impl<'de> Deserialize<'de> for SelectorOptions {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
            deserialize_aggregate(deserializer)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Provider {
        Bool(bool),
        Registration(SelectorOptions),
        Options(WorkOptions),
    }

    impl TrialDecode for Provider {
        const UNION: &'static str = "Provider";
        const CANDIDATES: &'static [Candidate<Self>] = &[
            Candidate::new("Bool", |raw: &Value| probe(raw, Provider::Bool)),
            Candidate::new("Registration", |raw: &Value| probe(raw, Provider::Registration)),
            Candidate::new("Options", |raw: &Value| probe(raw, Provider::Options)),
        ];

        fn variant(&self) -> &'static str {
            match self {
                Provider::Bool(_) => "Bool",
                Provider::Registration(_) => "Registration",
                Provider::Options(_) => "Options",
            }
        }
    }

    #[derive(Debug, PartialEq)]
    enum OptionalOnly {
        Work(WorkOptions),
        Resolve(ResolveOptions),
    }

    impl TrialDecode for OptionalOnly {
        const UNION: &'static str = "OptionalOnly";
        const CANDIDATES: &'static [Candidate<Self>] = &[
            Candidate::new("Work", |raw: &Value| probe(raw, OptionalOnly::Work)),
            Candidate::new("Resolve", |raw: &Value| probe(raw, OptionalOnly::Resolve)),
        ];

        fn variant(&self) -> &'static str {
            match self {
                OptionalOnly::Work(_) => "Work",
                OptionalOnly::Resolve(_) => "Resolve",
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct Inner {
        name: String,
        provider: Option<Provider>,
    }

    impl Aggregate for Inner {
        fn decode_fields(fields: &FieldReader<'_>) -> Result<Self> {
            Ok(Self {
                name: fields.required("name")?,
                provider: fields.ambiguous("provider")?,
            })
        }
    }

    #[derive(Debug, PartialEq)]
    struct Outer {
        count: Option<u32>,
        inner: Option<Inner>,
    }

    impl Aggregate for Outer {
        fn decode_fields(fields: &FieldReader<'_>) -> Result<Self> {
            Ok(Self {
                count: fields.optional("count")?,
                inner: fields.nested("inner")?,
            })
        }
    }

    #[test]
    fn test_trial_decode_picks_each_candidate() {
        let cases = vec![
            (json!(true), "Bool"),
            (json!({"documentSelector": null}), "Registration"),
            (json!({"documentSelector": ["rust"], "id": "r1"}), "Registration"),
            (json!({"workDoneProgress": true}), "Options"),
            (json!({}), "Options"),
        ];

        for (raw, expected) in cases {
            let decoded: Provider = trial_decode(&raw).unwrap();
            assert_eq!(decoded.variant(), expected, "raw: {}", raw);
        }
    }

    #[test]
    fn test_trial_decode_ignores_unknown_keys() {
        let raw = json!({"workDoneProgress": false, "somethingElse": 42});
        let decoded: Provider = trial_decode(&raw).unwrap();
        assert_eq!(
            decoded,
            Provider::Options(WorkOptions {
                work_done_progress: Some(false)
            })
        );
    }

    #[test]
    fn test_trial_decode_reports_last_candidate() {
        let err = trial_decode::<Provider>(&json!(3)).unwrap_err();
        assert_eq!(err.union, "Provider");
        assert_eq!(err.candidate, "Options");
        assert_eq!(err.attempts, 3);
        assert_eq!(err.found, "number");
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_trial_decode_type_mismatch_inside_object() {
        // Present but mistyped keys reject every object candidate
        let raw = json!({"workDoneProgress": "yes", "documentSelector": 7});
        let err = trial_decode::<Provider>(&raw).unwrap_err();
        assert_eq!(err.found, "object");
    }

    #[test]
    fn test_empty_object_first_match_wins() {
        let decoded: OptionalOnly = trial_decode(&json!({})).unwrap();
        assert_eq!(decoded.variant(), "Work");

        // Repeated decodes are deterministic
        for _ in 0..10 {
            let again: OptionalOnly = trial_decode(&json!({})).unwrap();
            assert_eq!(again, decoded);
        }
    }

    #[test]
    fn test_reader_absent_and_null_are_none() {
        let outer: Outer = decode(&json!({})).unwrap();
        assert_eq!(outer, Outer { count: None, inner: None });

        let outer: Outer = decode(&json!({"count": null, "inner": null})).unwrap();
        assert_eq!(outer, Outer { count: None, inner: None });
    }

    #[test]
    fn test_registration_shape_needs_selector_key() {
        let registration = decode::<SelectorOptions>(&json!({"documentSelector": null, "id": "r"}));
        assert_eq!(
            registration.unwrap(),
            SelectorOptions {
                document_selector: None,
                id: Some("r".to_string())
            }
        );

        // Without the key the registration candidate is rejected and the
        // optional-only shape behind it is reached
        assert!(decode::<SelectorOptions>(&json!({"workDoneProgress": true})).is_err());
        let decoded: Provider = trial_decode(&json!({"id": "r"})).unwrap();
        assert_eq!(decoded.variant(), "Options");
    }

    #[test]
    fn test_reader_null_opaque_slot_is_absent() {
        struct Hint {
            data: Option<Value>,
        }

        impl Aggregate for Hint {
            fn decode_fields(fields: &FieldReader<'_>) -> Result<Self> {
                Ok(Self {
                    data: fields.optional("data")?,
                })
            }
        }

        let hint: Hint = decode(&json!({"data": null})).unwrap();
        assert!(hint.data.is_none());

        let hint: Hint = decode(&json!({"data": {"id": 3}})).unwrap();
        assert_eq!(hint.data, Some(json!({"id": 3})));
    }

    #[test]
    fn test_reader_malformed_primitive() {
        let err = decode::<Outer>(&json!({"count": "three"})).unwrap_err();
        match err {
            Error::MalformedPrimitive { field, .. } => assert_eq!(field, "count"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_reader_nested_paths() {
        let err = decode::<Outer>(&json!({"inner": {"provider": true}})).unwrap_err();
        match err {
            Error::MissingField { field } => assert_eq!(field, "inner.name"),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = decode::<Outer>(&json!({"inner": {"name": "x", "provider": 1}})).unwrap_err();
        match err {
            Error::ShapeMismatch { field, source } => {
                assert_eq!(field, "inner.provider");
                assert_eq!(source.union, "Provider");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err = decode::<Outer>(&json!({"inner": [1, 2]})).unwrap_err();
        match err {
            Error::NotAnObject { path, found } => {
                assert_eq!(path, "inner");
                assert_eq!(found, "array");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_reader_nested_success() {
        let outer: Outer = decode(&json!({
            "count": 2,
            "inner": {"name": "hover", "provider": {"workDoneProgress": true}}
        }))
        .unwrap();

        let inner = outer.inner.unwrap();
        assert_eq!(inner.name, "hover");
        assert_eq!(inner.provider.unwrap().variant(), "Options");
        assert_eq!(outer.count, Some(2));
    }

    #[test]
    fn test_decode_non_object_root() {
        let err = decode::<Outer>(&json!("capabilities")).unwrap_err();
        assert!(matches!(err, Error::NotAnObject { found: "string", .. }));
    }

    #[test]
    fn test_required_nullable_keeps_null() {
        struct Registration {
            selector: Option<Vec<String>>,
        }

        impl Aggregate for Registration {
            fn decode_fields(fields: &FieldReader<'_>) -> Result<Self> {
                Ok(Self {
                    selector: fields.required("documentSelector")?,
                })
            }
        }

        let decoded: Registration = decode(&json!({"documentSelector": null})).unwrap();
        assert!(decoded.selector.is_none());

        let err = decode::<Registration>(&json!({})).err().unwrap();
        assert!(matches!(err, Error::MissingField { .. }));
    }

    #[test]
    fn test_decode_str_parse_error() {
        let err = decode_str::<Outer>("{not json").unwrap_err();
        assert_eq!(err.to_response_error().code.0, -32700);

        let outer: Outer = decode_str(r#"{"count": 1}"#).unwrap();
        assert_eq!(outer.count, Some(1));
    }

    #[test]
    fn test_encode_object_rejects_non_objects() {
        let map = encode_object(&WorkOptions { work_done_progress: Some(true) }).unwrap();
        assert_eq!(Value::Object(map), json!({"workDoneProgress": true}));

        assert!(matches!(encode_object(&true), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_encode_omits_absent_fields() {
        let map = encode_object(&WorkOptions { work_done_progress: None }).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_flatten_reads_the_same_object() {
        let raw = json!({"workDoneProgress": true, "resolveProvider": false});
        let object = raw.as_object().unwrap();
        let reader = FieldReader::new(object);

        let work: WorkOptions = reader.flatten().unwrap();
        let resolve: ResolveOptions = reader.flatten().unwrap();
        assert_eq!(work.work_done_progress, Some(true));
        assert_eq!(resolve.resolve_provider, Some(false));
    }
}

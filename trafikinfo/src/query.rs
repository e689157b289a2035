//! Query construction and the request envelope.
//!
//! A query is a set of named attributes on the `<QUERY>` element plus an
//! optional raw body placed between `<QUERY>` and `</QUERY>`. Attribute
//! names compare case-insensitively and render in ascending
//! case-insensitive name order, so the built document is deterministic
//! for any insertion order.
//!
//! Attribute values and the body are interpolated into the envelope
//! verbatim — no escaping, no validation. The service expects pre-formed
//! XML fragments (filters such as `<FILTER><EQ … /></FILTER>`) in the
//! body, and the wire format is preserved byte for byte. Callers own
//! well-formedness; [`Query::with_escaped_attribute`] opts in to escaping
//! for attribute values that may contain markup characters.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Attribute name with case-insensitive ordering.
///
/// Keeps the spelling it was first inserted with; comparison folds ASCII
/// case, so `CountyNo` and `countyno` are the same key.
#[derive(Debug, Clone)]
struct AttrName(String);

impl PartialEq for AttrName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for AttrName {}

impl PartialOrd for AttrName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AttrName {
    fn cmp(&self, other: &Self) -> Ordering {
        let left = self.0.bytes().map(|b| b.to_ascii_lowercase());
        let right = other.0.bytes().map(|b| b.to_ascii_lowercase());
        left.cmp(right)
    }
}

/// Ordered map of `<QUERY>` attributes.
///
/// Names compare case-insensitively; iteration yields entries in
/// ascending case-insensitive name order, which is also the order they
/// are rendered in the request document.
///
/// # Examples
///
/// ```
/// use trafikinfo::query::QueryAttributes;
///
/// let mut attrs = QueryAttributes::new();
/// attrs.insert("Limit", "5");
/// attrs.insert("changeid", "0");
///
/// let names: Vec<&str> = attrs.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, vec!["changeid", "Limit"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryAttributes {
    entries: BTreeMap<AttrName, String>,
}

impl QueryAttributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, replacing any existing value under the same
    /// name (compared case-insensitively). A replaced entry keeps its
    /// first-seen name spelling.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(AttrName(name.into()), value.into());
    }

    /// Insert an attribute only if no value exists under the same name
    /// (compared case-insensitively).
    pub fn insert_if_absent(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(AttrName(name.into()))
            .or_insert_with(|| value.into());
    }

    /// Look up an attribute value by name, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&AttrName(name.to_string()))
            .map(String::as_str)
    }

    /// Iterate entries in ascending case-insensitive name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.0.as_str(), v.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One query against a data category: `<QUERY>` attributes plus an
/// optional raw body.
///
/// An empty query ([`Query::new`]) is valid and asks for everything the
/// category holds, subject to the service's own limits. The body is the
/// content between `<QUERY>` and `</QUERY>` — usually a `<FILTER>`
/// fragment in the service's filter language — and is rendered verbatim,
/// never escaped or validated.
#[derive(Debug, Clone, Default)]
pub struct Query {
    attributes: QueryAttributes,
    body: String,
}

impl Query {
    /// Create an empty query: no extra attributes, empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a `<QUERY>` attribute. The value is rendered verbatim; use
    /// [`Query::with_escaped_attribute`] for values that may contain
    /// markup characters.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Set a `<QUERY>` attribute, escaping `<`, `>`, `&`, `'` and `"`
    /// in the value.
    pub fn with_escaped_attribute(mut self, name: impl Into<String>, value: &str) -> Self {
        self.attributes
            .insert(name, quick_xml::escape::escape(value).into_owned());
        self
    }

    /// Replace the whole attribute map.
    pub fn with_attributes(mut self, attributes: QueryAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the raw query body, replacing any previous body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// The attribute map.
    pub fn attributes(&self) -> &QueryAttributes {
        &self.attributes
    }

    /// The raw body fragment.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Build the request document for one query.
///
/// `objecttype` and `schemaversion` are filled in only when the query
/// does not already carry them under any spelling; caller-supplied
/// values always win. The key, the attribute values and the body are
/// interpolated without escaping. Whitespace and attribute order match
/// the wire format the service documents.
pub(crate) fn build_request(
    api_key: &str,
    query: &Query,
    object_type: &str,
    schema_version: &str,
) -> String {
    let mut attributes = query.attributes().clone();
    attributes.insert_if_absent("objecttype", object_type);
    attributes.insert_if_absent("schemaversion", schema_version);

    let mut rendered = String::new();
    for (name, value) in attributes.iter() {
        // each attribute carries its own leading space, separating the
        // first one from `<QUERY`
        let _ = write!(rendered, " {name}=\"{value}\"");
    }

    format!(
        "<REQUEST>\n  <LOGIN authenticationkey=\"{api_key}\" />\n  <QUERY{rendered}>\n    {body}\n  </QUERY>\n</REQUEST>",
        body = query.body(),
    )
}

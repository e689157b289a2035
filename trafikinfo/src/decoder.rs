//! Response decoding, with one reusable decoder per category.
//!
//! Building a decoder is cheap here, but callers treat them as
//! category-scoped resources: a [`DecoderCache`] hands out one shared
//! [`Decoder`] per result type, created on first use and reused by
//! every later call, including concurrent first uses.

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use moka::sync::Cache as MokaCache;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use tracing::debug;

use crate::error::Error;
use crate::schema::ResultSchema;

/// How much of an undecodable body is carried into the error.
const BODY_SNIPPET_CHARS: usize = 500;

/// The response document: a `<RESPONSE>` element wrapping one
/// `<RESULT>` block per query in the request.
///
/// The explicit bound overrides serde's inferred one: the field-level
/// `default` only needs `Vec<R>: Default`, not `R: Default`, and the
/// result types deliberately do not implement `Default`.
#[derive(Deserialize)]
#[serde(bound(deserialize = "R: serde::Deserialize<'de>"))]
struct ResponseEnvelope<R> {
    #[serde(rename = "RESULT", default)]
    results: Vec<R>,
}

/// Decodes response documents for one category.
pub(crate) struct Decoder<R> {
    object_type: &'static str,
    _marker: PhantomData<fn() -> R>,
}

impl<R: ResultSchema> Decoder<R> {
    fn new() -> Self {
        Self {
            object_type: R::OBJECT_TYPE,
            _marker: PhantomData,
        }
    }

    /// Decode a response document into its result blocks.
    ///
    /// The document must be rooted `<RESPONSE>`. A response with no
    /// `<RESULT>` children decodes to an empty list; malformed XML or a
    /// foreign root element is [`Error::Decode`], carrying the start of
    /// the offending document.
    pub(crate) fn decode(&self, body: &str) -> Result<Vec<R>, Error> {
        expect_response_root(body)?;

        let envelope: ResponseEnvelope<R> =
            quick_xml::de::from_str(body).map_err(|err| decode_error(err.to_string(), body))?;

        debug!(
            object_type = self.object_type,
            results = envelope.results.len(),
            "decoded response"
        );
        Ok(envelope.results)
    }
}

/// Reject documents whose root element is not `<RESPONSE>`.
///
/// Serde's struct matching ignores the root element's name, which would
/// let a proxy error page decode to an empty result list. The first
/// start element must be `<RESPONSE>`, whatever declarations or
/// comments precede it.
fn expect_response_root(body: &str) -> Result<(), Error> {
    let mut reader = Reader::from_str(body);
    loop {
        match reader.read_event() {
            Ok(Event::Start(element) | Event::Empty(element)) => {
                let name = element.name();
                if name.as_ref() == b"RESPONSE" {
                    return Ok(());
                }
                return Err(decode_error(
                    format!(
                        "expected a RESPONSE document, found <{}>",
                        String::from_utf8_lossy(name.as_ref()),
                    ),
                    body,
                ));
            }
            Ok(Event::Eof) => {
                return Err(decode_error("document has no root element".to_string(), body));
            }
            // declaration, comments, whitespace before the root
            Ok(_) => continue,
            Err(err) => return Err(decode_error(err.to_string(), body)),
        }
    }
}

fn decode_error(message: String, body: &str) -> Error {
    Error::Decode {
        message,
        body: body.chars().take(BODY_SNIPPET_CHARS).collect(),
    }
}

/// Hands out one shared [`Decoder`] per result type.
///
/// Keyed by the result type's `TypeId`; first use creates the decoder,
/// and concurrent first uses converge on a single instance. Clones
/// share the same underlying cache.
#[derive(Clone)]
pub(crate) struct DecoderCache {
    decoders: MokaCache<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl DecoderCache {
    pub(crate) fn new() -> Self {
        // No capacity bound and no TTL: there is at most one decoder
        // per category, and entries live for the process.
        Self {
            decoders: MokaCache::builder().build(),
        }
    }

    /// Get the decoder for `R`, creating it on first use.
    pub(crate) fn get<R: ResultSchema>(&self) -> Arc<Decoder<R>> {
        let entry = self.decoders.get_with(TypeId::of::<R>(), || {
            Arc::new(Decoder::<R>::new()) as Arc<dyn Any + Send + Sync>
        });

        match entry.downcast::<Decoder<R>>() {
            Ok(decoder) => decoder,
            // Entries are keyed by TypeId, so the value under R's key
            // is always a Decoder<R>.
            Err(_) => unreachable!("decoder cache entry does not match its key type"),
        }
    }

    /// Number of decoders created so far.
    #[cfg(test)]
    pub(crate) fn entry_count(&self) -> u64 {
        self.decoders.run_pending_tasks();
        self.decoders.entry_count()
    }
}

impl fmt::Debug for DecoderCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderCache")
            .field("entries", &self.decoders.entry_count())
            .finish()
    }
}

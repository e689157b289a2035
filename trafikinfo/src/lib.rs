//! Client for the Trafikverket traffic-information query service.
//!
//! The service publishes rail, road and road-surface data behind one
//! XML-over-HTTP endpoint: a request document carries a login key and
//! a query, and the response carries the matching records. [`Query`]
//! builds the query element, a turbofish on [`Client::fetch`] picks
//! the category, and the typed records come back as the `*Result`
//! structs in [`schema`].
//!
//! ```no_run
//! use trafikinfo::schema::CameraResult;
//! use trafikinfo::{Client, ClientConfig, Query};
//!
//! # async fn demo() -> Result<(), trafikinfo::Error> {
//! let client = Client::new(ClientConfig::new("your-api-key"))?;
//! let query = Query::new().with_attribute("limit", "5");
//!
//! for result in client.fetch::<CameraResult>(&query, None).await? {
//!     for camera in result.cameras {
//!         println!("{:?}: {:?}", camera.name, camera.photo_url);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Attribute values and query bodies are interpolated into the request
//! document verbatim; see [`Query`] for where escaping is yours to do.

pub mod client;
mod decoder;
pub mod error;
pub mod query;
pub mod schema;

pub use client::{Client, ClientConfig};
pub use error::Error;
pub use query::{Query, QueryAttributes};
pub use schema::ResultSchema;

//! Studiorec storage library
//!
//! Best-effort publishing of finished MP3s to a remote blob store. The
//! `BlobPublisher` trait is the capability seam: the ingest pipeline calls
//! it without knowing whether a real bucket is configured, and a publish
//! failure is always reported through the result, never by panicking or
//! aborting the request.

pub mod factory;
pub mod gcs;
pub mod noop;
pub mod traits;

pub use factory::create_publisher;
pub use gcs::GcsPublisher;
pub use noop::NoopPublisher;
pub use traits::{BlobPublisher, PublishError, PublishResult};

//! # Vehiclelink Client
//!
//! Typed async client for the Vehiclelink vehicle-reference-data API:
//! segments, makes, families, body styles, vehicles, variants, and
//! attachments behind one `fetch_*` method per resource.
//!
//! This crate provides:
//! - `VehiclelinkClient`, a bearer-token authenticated GET client
//! - A declarative endpoint table that renders paths and query strings
//! - A uniform error taxonomy (validation, status, transport, decode)
//! - Cooperative per-request cancellation via `CancellationToken`
//!
//! The client is a pass-through: payloads are decoded from JSON exactly as
//! the server returns them, with no caching, retries, or local conversion.
//! Unit fields (`size_unit`, `weight_unit`) are request-scoped — the caller
//! names a unit in the query and the server returns converted values.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vehiclelink::{FetchOptions, VehiclelinkClient, VehiclelinkConfig};
//!
//! # async fn run() -> Result<(), vehiclelink::ClientError> {
//! let client = VehiclelinkClient::new(VehiclelinkConfig {
//!     host: "https://vehiclelink.example.com".to_string(),
//!     bearer_token: "token".to_string(),
//!     ..VehiclelinkConfig::default()
//! })?;
//!
//! let makes = client.fetch_makes("vehicles", &FetchOptions::default()).await?;
//! for make in &makes {
//!     println!("{}: {}", make.code, make.description);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod encoding;
pub mod endpoint;
pub mod model;
pub mod request;

pub use client::{
    AttachmentQuery, FetchOptions, VariantQuery, VehicleQuery, VehiclelinkClient,
    VehiclelinkConfig,
};
pub use model::{Attachment, BodyStyle, Family, Make, Segment, Variant, Vehicle};
pub use request::ClientError;

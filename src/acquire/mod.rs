//! Acquire Module - from source link to bound record
//!
//! - `link`: SourceLink parsing and derived fields
//! - `client`: XrpcClient trait and the reqwest implementation
//! - `mock`: recording mock client
//! - `acquirer`: the dependent profile → posts fetch
//! - `record`: BoundRecord (post merged with link fields)

mod acquirer;
mod client;
mod link;
mod mock;
mod record;

// Re-export public types
pub use acquirer::{post_uri, DataAcquirer, GET_POSTS, GET_PROFILE, POST_COLLECTION};
pub use client::{HttpXrpcClient, XrpcClient};
pub use link::{LinkFields, SourceLink};
pub use mock::MockXrpcClient;
pub use record::BoundRecord;

//! Utilities Module - shared infrastructure
//!
//! - `constants`: Centralized timeouts, limits and marker names
//! - `path`: Path expression parser/resolver for slot keys

pub mod constants;
pub mod path;

// Re-export public types
pub use constants::{
    BODY_TEXT_PATH, CONNECT_TIMEOUT, FETCH_TIMEOUT, REDIRECT_LIMIT, ROLE_ATTRIBUTE,
    SLOT_ATTRIBUTE, UNDEFINED,
};
pub use path::Segment;

//! Binding Module - record values into template slots
//!
//! - `value`: SlotValue (absent / URL / scalar) and display strings
//! - `slot`: SlotSpec, SlotRole and the write policy (SlotWrite)
//! - `binder`: SlotBinder walking a fragment
//!
//! Slot markup:
//! ```html
//! <blockquote data-key="record.text"></blockquote>
//! <a data-key="url" data-role="link">@<span data-key="username"></span></a>
//! <img data-key="author.avatar" data-role="image">
//! ```
//!
//! Data flow:
//! ```text
//! data-key="a, b"  → SlotSpec { keys, role }
//!                          ↓
//!              BoundRecord::resolve(key)
//!                          ↓
//!                SlotValue::classify
//!                          ↓
//!                 SlotWrite::plan → apply
//! ```

mod binder;
mod slot;
mod value;

// Re-export public types
pub use binder::{BindReport, SlotBinder};
pub use slot::{parse_keys, SlotRole, SlotSpec, SlotWrite};
pub use value::{display_value, SlotValue};

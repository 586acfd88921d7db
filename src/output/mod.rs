//! Read-only encoders for assembled family graphs
//!
//! Both encoders consume a registry only after its worklist is empty.

pub mod dot;
pub mod json;

pub use dot::render_dot;
pub use json::{PersonEncoding, encode_registry, write_json};

//! Strongly-typed domain types for safer APIs.
//!
//! Group and element indices are distinct newtypes so per-group tables
//! cannot be indexed with an element number by accident.
//!
//! # Example
//!
//! ```
//! use dg_filter::types::{ElementIndex, GroupIndex};
//!
//! let table = vec!["line", "triangle"];
//! assert_eq!(table[GroupIndex::new(1)], "triangle");
//! assert_eq!(ElementIndex::new(0).get(), 0);
//! ```

mod indices;

pub use indices::{ElementIndex, GroupIndex};

//! Codability — compile-time coding-key synthesis for serializable types.
//!
//! Annotate a struct with `#[derive(CodingKeys)]` and a compact override
//! string, and the macro synthesizes a key enum mapping every field to its
//! serialized key. Fields without overrides keep their own name:
//!
//! ```rust
//! use codability::{CodingKey, CodingKeys};
//!
//! #[derive(CodingKeys)]
//! #[coding_keys("name=firstName, last_name=surname")]
//! struct Person {
//!     name: String,
//!     last_name: String,
//!     age: u32,
//! }
//!
//! assert_eq!(PersonCodingKeys::Name.coding_key(), "firstName");
//! assert_eq!(PersonCodingKeys::Age.coding_key(), "age");
//! ```
//!
//! Invalid override strings are rejected at compile time with a diagnostic
//! naming the offending segment; a blank string produces a warning and the
//! identity mapping.

mod traits;

pub use codability_core as core;
pub use codability_derive::CodingKeys;
pub use traits::{CodingKey, HasCodingKeys};

//! Host-independent core of the Codability coding-key synthesizer.
//!
//! The macro front end lowers a type declaration into a [`TypeBody`], then
//! calls [`synthesize`] with the raw override string. Everything in this
//! crate is plain data and pure functions; no syntax-framework types cross
//! its boundary in either direction.

mod diagnostic;
mod mapping;
mod member;
mod scan;


pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use mapping::{FieldKeyMapping, Synthesis, synthesize};
pub use member::{FieldDescriptor, Member, TypeBody};
pub use scan::{OverrideEntry, OverrideTable};

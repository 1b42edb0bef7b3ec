//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, namely trace
//! identifiers with access logging and panic recovery.

pub mod recover;
pub mod trace;

pub use recover::Recover;
pub use trace::Trace;

//! Outbound adapters implementing domain storage ports.
//!
//! Adapters are thin translators between domain records and their storage
//! representation. They contain no business rules beyond the merge logic the
//! domain records expose.
//!
//! - **memory**: in-process, mutex-guarded repositories

pub mod memory;

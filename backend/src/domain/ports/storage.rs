//! Failure outcomes shared by every storage port.

use super::define_port_error;

define_port_error! {
    /// Tagged result of a storage call that did not succeed.
    ///
    /// `NotFound` is deliberately code-less: the entity services translate it
    /// into their own business error before it can reach an inbound adapter.
    pub enum StorageError {
        /// No record matches the requested identifier.
        NotFound => "record not found",
        /// The backing store could not be reached or is unusable.
        Unavailable { message: String } => "storage unavailable: {message}",
        /// The store rejected or failed to execute the operation.
        Query { message: String } => "storage query failed: {message}",
    }
}

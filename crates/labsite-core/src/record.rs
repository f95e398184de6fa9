//! Record identity.
//!
//! Every record in a collection carries an [`EntityId`] that is unique within
//! that collection and immutable after creation. Ids are assigned by the
//! content store from a monotonic counter, never by callers.

/// The integer identifier assigned to a record at creation time.
pub type EntityId = u64;

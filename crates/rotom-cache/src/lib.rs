//! Volatile TTL document cache for Rotom.
//!
//! Entries expire individually; there is no background sweeper. The store
//! lives for the whole process and is never explicitly torn down.

pub mod store;

pub use store::MemoryStore;

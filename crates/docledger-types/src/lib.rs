//! Foundation types for Docledger.
//!
//! This crate provides the types shared by every other Docledger crate.
//!
//! # Key Types
//!
//! - [`ChainDigest`] — 256-bit record digest, hex-serialized on the wire
//! - [`DocumentEntry`] — the registration payload carried by each record
//! - [`DeedDocument`] — deed metadata used by the identifier-derivation endpoint

pub mod deed;
pub mod digest;
pub mod entry;
pub mod error;

pub use deed::DeedDocument;
pub use digest::ChainDigest;
pub use entry::DocumentEntry;
pub use error::TypeError;

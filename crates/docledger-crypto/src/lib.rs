//! Hashing primitives for Docledger.
//!
//! Provides domain-separated BLAKE3 content hashing, the record link-hash
//! function that binds each chain record to its predecessor, and the
//! deterministic deed-identifier derivation used outside the chain.
//!
//! Everything in this crate is pure: same inputs, same digests, no shared
//! state.

pub mod hasher;
pub mod ident;
pub mod linker;

pub use hasher::{ContentHasher, HasherError};
pub use ident::derive_document_id;
pub use linker::link_hash;

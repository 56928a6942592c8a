//! # Teleproxy Protocol
//!
//! Wire-level types for the subset-cache protocol spoken by the teleproxy
//! client.
//!
//! This crate provides:
//! - Deterministic subset key derivation (branch id + machine identity hash)
//! - The subset-creation request body and its JSON encoding
//! - The subset list type selector (`machine_ids` / `leaf_ids`)
//!
//! ## Key Invariants
//!
//! - Key derivation is a pure function: identical branch id and machine
//!   identifier sequences always derive the same key
//! - Derivation is order-sensitive: the machine identifier sequence is
//!   hashed in caller order, never sorted
//! - The subset creation body names its identifier list by the configured
//!   list type, nothing else varies with it

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod key;
mod messages;

pub use error::{ProtocolError, ProtocolResult};
pub use key::SubsetKey;
pub use messages::{SubsetCreateBody, SubsetListType};

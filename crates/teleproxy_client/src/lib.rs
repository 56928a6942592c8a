//! # Teleproxy Client
//!
//! Subset-aware proxy client for the backend telemetry API.
//!
//! This crate provides:
//! - A dispatcher that forwards arbitrary HTTP operations to the backend
//! - Transparent routing of subsetted resources through the server-side
//!   subset cache, keyed by the caller's machine identity
//! - The subset resolution state machine (attempt, miss, create, retry)
//! - Layered request construction with client-wide defaults
//! - A uniform result envelope shared by every call path
//!
//! ## Architecture
//!
//! Data flows one way: dispatcher → (subset resolver → request builder)
//! or (request builder directly) → transport → normalized result. The
//! transport, credentials, machine identity, and logging sink are all
//! injected; the client itself holds no mutable state and performs at
//! most two sequential round trips per call.
//!
//! ## Key Invariants
//!
//! - Public entry points always return a [`CallResult`], never an error
//! - The subset base URL is derived once at construction
//! - A 412 on the first fetch attempt triggers exactly one creation and
//!   exactly one retry; every other non-success status is terminal
//! - Identity is read live per call, never cached

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod call;
mod client;
mod config;
mod credentials;
mod error;
mod identity;
mod logger;
mod request;
mod subset;
mod transport;

pub use call::{CallData, CallExtra, CallRequest, CallResult};
pub use client::Client;
pub use config::ClientConfig;
pub use credentials::{BearerCredentials, Credentials, NoCredentials};
pub use error::{ClientError, ClientResult};
pub use identity::{IdentitySource, StaticIdentity};
pub use logger::{Logger, NoopLogger, TracingLogger};
pub use request::{build_request, RequestDescriptor, RequestOptions};
pub use transport::{HttpResponse, MockTransport, Transport};

// Re-export the protocol vocabulary callers configure the client with.
pub use teleproxy_protocol::{SubsetCreateBody, SubsetKey, SubsetListType};

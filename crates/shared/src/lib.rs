//! Steeple Shared Types and Utilities
//!
//! This crate contains the tenant data model, the tenant registry and the
//! events catalog shared by the Steeple site binaries.

pub mod error;
pub mod event;
pub mod registry;
pub mod tenant;

pub use error::*;
pub use event::{Event, EventCatalog};
pub use registry::{normalize_host, DuplicateHostPolicy, TenantRegistry};
pub use tenant::*;

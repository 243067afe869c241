//! Provisioner Models - request schema and domain model for runtime provisioning
//!
//! - [`gqlschema`] holds the API-facing request types as they arrive from callers.
//! - [`model`] holds the internal, persistable cluster model produced from them.
//! - [`release`] describes the default component set of a Kyma release.

pub mod gqlschema;
pub mod model;
pub mod release;

mod error;

pub use error::ValidationError;

//! Provisioner Converter - turns provisioning requests into cluster models
//!
//! The [`InputConverter`] validates an API-facing [`ProvisionRuntimeInput`]
//! and assembles the internal [`Cluster`] that is persisted and later handed
//! to orchestration. It depends on two injected collaborators: a
//! [`UuidGenerator`] for the IDs of nested objects and a [`ReleaseProvider`]
//! for the default components of a Kyma release.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use provisioner_converter::{InputConverter, RandomUuidGenerator, ReleaseCatalog};
//! use provisioner_models::gqlschema::ProvisionRuntimeInput;
//!
//! # fn example(input: ProvisionRuntimeInput) -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = ReleaseCatalog::from_yaml("releases: []")?;
//! let converter = InputConverter::new(
//!     Arc::new(RandomUuidGenerator),
//!     Arc::new(catalog),
//!     "gardener-project",
//! );
//!
//! let cluster = converter.convert("runtime-id", &input, "tenant", None)?;
//! # Ok(())
//! # }
//! ```
//!
//! [`ProvisionRuntimeInput`]: provisioner_models::gqlschema::ProvisionRuntimeInput
//! [`Cluster`]: provisioner_models::model::Cluster

pub mod converter;
pub mod errors;
pub mod names;
pub mod release;
pub mod uuid;

pub use crate::converter::InputConverter;
pub use crate::errors::ConversionError;
pub use crate::release::{CatalogError, ReleaseCatalog, ReleaseError, ReleaseProvider};
pub use crate::uuid::{RandomUuidGenerator, UuidGenerator};

//! bkt-core: Core library for the bkt object storage CLI
//!
//! This crate provides the SDK-independent pieces of bkt:
//! - Environment and credential resolution
//! - The ObjectStore trait for storage operations
//! - Byte-size and content-type formatting helpers
//!
//! The AWS SDK is confined to the bkt-s3 crate; everything here can be
//! exercised without a network.

pub mod content_type;
pub mod credentials;
pub mod env_file;
pub mod error;
pub mod format;
pub mod traits;

pub use content_type::{DEFAULT_CONTENT_TYPE, content_type_for};
pub use credentials::CredentialBundle;
pub use env_file::{DEFAULT_ENV_FILE, Environment};
pub use error::{Error, Result};
pub use format::{format_bytes, format_bytes_with};
pub use traits::{BucketSummary, ObjectStore, ObjectSummary};

/// Region used when `--region` is not given. Also the fixed query region for
/// bucket-location lookups, and the label reported when the service encodes
/// the default region as an empty location.
pub const DEFAULT_REGION: &str = "us-east-1";

//! Declarative access policies
//!
//! Two YAML shapes are supported:
//!
//! ```yaml
//! # repositories/api.yml - one file per repository
//! repository: api
//! teams: [platform, backend]
//! permission: write
//! ```
//!
//! ```yaml
//! # repositories.yml - aggregate manifest
//! repos:
//!   - repository: api
//!     teams: [platform]
//!     permission: maintain
//!   - repository: docs
//! ```

pub mod loader;
pub mod permission;
pub mod types;

pub use loader::{PolicySource, load_manifest, load_policy_dir, parse_manifest, parse_policy_file};
pub use permission::Permission;
pub use types::{EntrySource, PolicyEntry};

//! Team access reconciliation
//!
//! For each policy entry: list the teams that currently have access, upsert
//! every desired team with the configured permission, then revoke teams that
//! are no longer desired.

pub mod plan;
pub mod reconciler;

pub use plan::{AccessPlan, Upsert};
pub use reconciler::{Reconciler, SyncOptions};

//! Snapshot engine for the catalog mirror
//!
//! - **Arc-wrapped immutable snapshots**: cheap cloning via reference counting
//! - **Whole-snapshot replacement**: readers never see a partially built index
//! - **Build off the lock**: the store is only locked for the pointer swap

pub mod builder;
pub mod snapshot;
pub mod store;

pub use builder::CatalogSnapshotBuilder;
pub use snapshot::CatalogSnapshot;
pub use store::CatalogStore;

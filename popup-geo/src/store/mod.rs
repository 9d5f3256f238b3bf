//! Spatial persistence for located entities.
//!
//! [`SpatialStore`] is the asynchronous contract the location index talks
//! to. [`MemorySpatialStore`] implements it in process memory, bucketing
//! points into 1°×1° [`GeoCell`]s, and can be saved to or loaded from a
//! JSON [`Snapshot`].
//!
//! ```text
//! MemorySpatialStore
//! ├── vendors:  RwLock<KindTable>
//! │   ├── records: id → LocatedEntity
//! │   └── cells:   (+48+002) → {v-1, v-7}
//! └── products: RwLock<KindTable>
//!     ├── records
//!     └── cells
//! ```

mod cell;
mod memory;
mod snapshot;
mod traits;

pub use cell::{CellCover, GeoCell};
pub use memory::MemorySpatialStore;
pub use snapshot::{Snapshot, SnapshotError};
pub use traits::{SpatialStore, StoreError, StoreResult};

pub mod criteria;
pub mod filter;
pub mod object;
pub mod ordering;
pub mod outcome;
pub mod plan;
pub mod retention;

pub use criteria::{
    megabytes_to_bytes, CleanupCriteria, SortDirection, SortKey, BYTES_PER_MEGABYTE,
};
pub use filter::CleanupFilter;
pub use object::StoredObject;
pub use ordering::sort_objects;
pub use outcome::RunOutcome;
pub use plan::CleanupPlan;
pub use retention::{deletion_count, select_deletion_targets};

//! Domain model for tasks.
//!
//! The task domain models the status machine (with derived completion
//! timestamp), priority, due-date predicates, and the canonical listing
//! order shared by every adapter. All infrastructure concerns are kept
//! outside the domain boundary.

mod description;
mod error;
mod ids;
mod priority;
mod status;
mod task;
mod title;

pub use description::TaskDescription;
pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, due_date_order, listing_order};
pub use title::TaskTitle;

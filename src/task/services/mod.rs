//! Application services for task lifecycle and querying.

mod lifecycle;
mod queries;

pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleService, TaskServiceError, TaskServiceResult,
    UpdateTaskRequest,
};
pub use queries::{TaskQueryError, TaskQueryResult, TaskQueryService, TaskStats};

//! Application services for category lifecycle and listings.

mod lifecycle;

pub use lifecycle::{
    CategoryLifecycleService, CategoryServiceError, CategoryServiceResult, CategoryTaskCount,
    CreateCategoryRequest, UpdateCategoryRequest,
};

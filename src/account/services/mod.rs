//! Application services for account administration.

mod directory;

pub use directory::{
    UpdateUserRequest, UserDirectoryError, UserDirectoryResult, UserDirectoryService,
};

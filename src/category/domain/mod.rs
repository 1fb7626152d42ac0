//! Domain model for task categories.
//!
//! Categories are owner-scoped labels with a display color. Ownership is
//! fixed at creation; a category never changes hands. All infrastructure
//! concerns are kept outside the domain boundary.

mod category;
mod color;
mod description;
mod error;
mod ids;
mod name;

pub use category::{Category, PersistedCategoryData};
pub use color::HexColor;
pub use description::CategoryDescription;
pub use error::CategoryDomainError;
pub use ids::CategoryId;
pub use name::CategoryName;

//! Shared newtype wrappers used across the workspace.

pub mod email;
pub mod id;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use id::{CourseId, PurchaseId, UserId};
pub use price::{CurrencyCode, Price};
pub use status::PurchaseStatus;

//! Application services.

pub mod auth;
pub mod payments;

pub use auth::{AuthError, AuthService};
pub use payments::{PaymentError, PaymentService};

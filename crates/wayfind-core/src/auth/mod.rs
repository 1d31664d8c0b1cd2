//! Authentication domain: credentials, sessions, and the identity service
//! contract.

pub mod model;
pub mod service;
pub mod session;
pub mod validation;

pub use model::{Credentials, RegistrationForm, Session, UserProfile};
pub use service::{IdentityService, UnauthorizedHandler};
pub use session::SessionHolder;
pub use validation::{PasswordStrength, is_valid_email};

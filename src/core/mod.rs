pub mod analyzer;
pub mod engine;
pub mod report;
pub mod service;
pub mod tree;

pub use crate::domain::model::{Lifetime, Manifest, Registration};
pub use crate::domain::ports::{RegistrationFilter, RegistrationSource};
pub use crate::utils::error::Result;

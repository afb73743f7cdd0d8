pub mod error;
pub mod logger;
pub mod type_name;
pub mod validation;

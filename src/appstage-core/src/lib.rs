pub mod env;
pub mod error;
pub mod fs;
pub mod layout;

//! Command implementations.

pub mod build;
pub mod migrate;
pub mod validate;

pub use self::build::execute_build;
pub use self::migrate::execute_migrate;
pub use self::validate::execute_validate;

pub mod env;
pub mod fp;

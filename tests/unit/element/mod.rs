pub mod profile;
pub mod runtime;
pub mod signal;

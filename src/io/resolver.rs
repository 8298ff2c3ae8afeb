//! Asynchronous lookup of profiles by external reference
//!
//! Restoring a snapshot awaits one resolution at a time, so implementations
//! never see concurrent requests from this crate.

use crate::element::ProfileRef;
use crate::io::error::Result;
use std::future::Future;

/// Source of profiles addressed by reference
pub trait ProfileResolver {
    /// Look up the profile stored under `reference`
    ///
    /// # Errors
    ///
    /// Implementations report unknown references and failed loads; a failure
    /// stops the restore that requested it.
    fn resolve(&self, reference: &str) -> impl Future<Output = Result<ProfileRef>>;
}

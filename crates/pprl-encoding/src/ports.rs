//! Driven ports: external collaborators of the encoding pipeline.

use shared_types::Idat;

use crate::error::LookupError;

/// Master patient index lookup.
///
/// The MPI is an external system; implementations may block on I/O and
/// are called from rayon worker threads, one lookup per row. A miss must
/// be reported as [`LookupError::NotFound`], never as a panic or an
/// empty container.
pub trait MasterPatientIndexClient: Send + Sync {
    /// Resolve the IDAT container for a site-local record identifier.
    fn fetch_idat(&self, ehr_id: &str) -> Result<Idat, LookupError>;
}

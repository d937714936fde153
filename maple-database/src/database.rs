use crate::store::StoreBackend;

/// Shared store handle passed across crates.
///
/// Cloning is cheap: every clone points at the same tables.
#[derive(Clone, Debug)]
pub struct Database {
    backend: StoreBackend,
}

impl Database {
    /// Create a handle backed by process-lifetime in-memory tables.
    pub fn in_memory() -> Self {
        Self {
            backend: StoreBackend::memory(),
        }
    }

    /// Short name of the active backend, for startup logging.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Expose the backend for query modules.
    pub(crate) fn backend(&self) -> &StoreBackend {
        &self.backend
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::in_memory()
    }
}

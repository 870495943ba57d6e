/// Identifier of a worker: the logical processor it was pinned to.
pub type CoreId = usize;

/// Ordered record of which worker won each acquisition.
///
/// Capacity is reserved up front. Appends happen inside the critical section
/// with the timer running, and a reallocation there would flush the very
/// cache state being measured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcquisitionLog {
    entries: Vec<CoreId>,
}

impl AcquisitionLog {
    pub fn with_capacity(capacity: usize) -> Self {
        AcquisitionLog {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends `id`. Must not grow past the reserved capacity.
    #[inline]
    pub fn record(&mut self, id: CoreId) {
        debug_assert!(
            self.entries.len() < self.entries.capacity(),
            "acquisition log outgrew its reservation"
        );
        self.entries.push(id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn as_slice(&self) -> &[CoreId] {
        &self.entries
    }
}

impl From<Vec<CoreId>> for AcquisitionLog {
    fn from(entries: Vec<CoreId>) -> Self {
        AcquisitionLog { entries }
    }
}

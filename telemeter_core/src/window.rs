//! Fixed-capacity sliding window of the most recent samples.

/// One scaled distance reading, in tenths of a millimeter.
/// `0` is the reserved fault sentinel, not a valid reading.
pub type Sample = u32;

/// FIFO of the N most recent samples, most-recent-last.
///
/// Zero-filled at construction: until `size` pushes have happened the oldest
/// entries are the fault sentinel, so early medians and derivatives see a
/// partially synthetic window. `is_warm` exposes that state to callers.
///
/// `push` is O(N) (a single in-place rotate) and never allocates after
/// construction.
#[derive(Debug, Clone)]
pub struct WindowBuffer {
    buf: Vec<Sample>,
    seen: usize,
}

impl WindowBuffer {
    pub fn new(size: usize) -> Self {
        Self {
            buf: vec![0; size.max(1)],
            seen: 0,
        }
    }

    /// Evict the oldest entry and append `sample`.
    pub fn push(&mut self, sample: Sample) {
        self.buf.rotate_left(1);
        if let Some(last) = self.buf.last_mut() {
            *last = sample;
        }
        self.seen = self.seen.saturating_add(1);
    }

    /// Read-only view of the current contents, always length N.
    pub fn snapshot(&self) -> &[Sample] {
        &self.buf
    }

    /// The most recent sample (0 before the first push).
    pub fn latest(&self) -> Sample {
        self.buf.last().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// True once every slot has been overwritten by a real push.
    pub fn is_warm(&self) -> bool {
        self.seen >= self.buf.len()
    }
}

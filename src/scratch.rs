//! Bounded stack-discipline scratch memory
//!
//! One contiguous region handed out front to back. Space is given back by
//! rewinding to a [`Mark`] taken earlier; there is no per-allocation free.

/// Saved top of a [`ScratchStack`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mark(usize);

#[derive(Debug, Clone)]
pub struct ScratchStack {
    data: Vec<u8>,
    top: usize,
}

impl ScratchStack {
    pub fn new(capacity: usize) -> Self {
        log::debug!("Scratch stack: {capacity} bytes");
        Self {
            data: vec![0; capacity],
            top: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn used(&self) -> usize {
        self.top
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.top
    }

    /// Current top, to rewind to later with [`pop_to`](Self::pop_to)
    #[inline]
    pub fn mark(&self) -> Mark {
        Mark(self.top)
    }

    /// Take `size` bytes whose address is a multiple of `align`.
    ///
    /// Returns `None` without changing anything when the region is exhausted.
    /// Panics if `align` is not a power of two.
    pub fn push(&mut self, size: usize, align: usize) -> Option<&mut [u8]> {
        assert!(align.is_power_of_two(), "scratch alignment {align} is not a power of two");

        let base = self.data.as_ptr() as usize;
        let start = (base + self.top).checked_next_multiple_of(align)? - base;
        let end = start.checked_add(size)?;
        if end > self.capacity() {
            return None;
        }

        self.top = end;
        Some(&mut self.data[start..end])
    }

    /// Give back everything pushed since `mark`
    pub fn pop_to(&mut self, mark: Mark) {
        assert!(
            mark.0 <= self.top,
            "scratch mark {} is above the current top {}",
            mark.0,
            self.top
        );
        self.top = mark.0;
    }

    pub fn clear(&mut self) {
        self.top = 0;
    }
}

use log::trace;

use crate::error::{CapacityError, IndexError};
use crate::index::{DefaultIndex, RingIndex};
use crate::ring_buffer::{sealed, Cursors, RingBuffer};
use crate::unchecked::UncheckedRing;

/// Ring buffer that validates every indexed access.
///
/// Wraps an [`UncheckedRing`] and keeps its layout. [`get`](RingBuffer::get)
/// and [`put`](RingBuffer::put) first evaluate
/// [`is_index_in_range`](RingBuffer::is_index_in_range) and return an
/// [`IndexError`] without touching storage when it fails. `push`, `pop`,
/// `head` and `tail` go through those two and are validated the same way.
///
/// A push is checked against the ring as it will be after the push: the
/// counter already incremented and `head` one past the target slot. So a push
/// succeeds whenever `tail <= head` and the ring is not full, an empty ring
/// included. A push into a full ring is rejected and overwrites nothing.
///
/// The range test compares raw cursors, so once the head cursor wraps around
/// below the tail no access passes until the tail wraps as well. A ring
/// filled to exactly its capacity is in that situation (`head == tail`).
#[derive(Debug, Clone)]
pub struct CheckedRing<T, I = DefaultIndex> {
    ring: UncheckedRing<T, I>,
}

impl<T: Copy + Default, I: RingIndex> CheckedRing<T, I> {
    /// Creates a ring of `capacity` slots, each set to `T::default()`.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        let ring = UncheckedRing::build(vec![T::default(); capacity].into_boxed_slice(), "checked")?;
        Ok(Self { ring })
    }
}

impl<T: Copy, I: RingIndex> CheckedRing<T, I> {
    /// Wraps caller-supplied storage; its length becomes the capacity.
    pub fn with_storage(storage: impl Into<Box<[T]>>) -> Result<Self, CapacityError> {
        let ring = UncheckedRing::build(storage.into(), "checked")?;
        Ok(Self { ring })
    }

    /// Drops validation, keeping storage and cursors.
    pub fn into_unchecked(self) -> UncheckedRing<T, I> {
        self.ring
    }

    /// Gives the storage back, in slot order.
    pub fn into_storage(self) -> Box<[T]> {
        self.ring.into_storage()
    }

    /// Passes iff `index` is in range and the counter does not exceed the
    /// capacity. The second test only fails while a push into a full ring
    /// is in flight.
    #[inline]
    fn admit(&self, index: I) -> Result<(), IndexError<I>> {
        if self.is_index_in_range(index) & (self.len() <= self.capacity()) {
            return Ok(());
        }
        let c = self.ring.cursors();
        trace!(
            "rejected index {} (head={}, tail={}, len={})",
            index,
            c.head,
            c.tail,
            c.len
        );
        Err(IndexError { index })
    }
}

impl<T: Copy, I: RingIndex> From<UncheckedRing<T, I>> for CheckedRing<T, I> {
    fn from(ring: UncheckedRing<T, I>) -> Self {
        Self { ring }
    }
}

impl<T, I> sealed::Sealed for CheckedRing<T, I> {}

impl<T: Copy, I: RingIndex> RingBuffer for CheckedRing<T, I> {
    type Item = T;
    type Index = I;
    type Error = IndexError<I>;

    #[inline]
    fn capacity(&self) -> I {
        self.ring.capacity()
    }

    #[inline]
    fn cursors(&self) -> &Cursors<I> {
        self.ring.cursors()
    }

    #[inline]
    fn cursors_mut(&mut self) -> &mut Cursors<I> {
        self.ring.cursors_mut()
    }

    #[inline]
    fn get(&self, index: I) -> Result<T, IndexError<I>> {
        self.admit(index)?;
        Ok(self.ring.get(index))
    }

    #[inline]
    fn put(&mut self, index: I, value: T) -> Result<T, IndexError<I>> {
        self.admit(index)?;
        Ok(self.ring.put(index, value))
    }
}

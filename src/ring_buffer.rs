use num_traits::{Signed, Zero};

use crate::index::RingIndex;

/// Cursor and counter bookkeeping shared by every ring variant.
///
/// Outside of an in-flight push `0 <= head < capacity` and
/// `0 <= tail < capacity`. `len` is unclamped. The capacity lives with the
/// storage, so slot access never trusts these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursors<I> {
    pub(crate) head: I,
    pub(crate) tail: I,
    pub(crate) len: I,
}

impl<I: RingIndex> Cursors<I> {
    pub(crate) fn new() -> Self {
        Self {
            head: I::zero(),
            tail: I::zero(),
            len: I::zero(),
        }
    }

    /// Raw position test: no modulo reduction of `index`.
    #[inline]
    pub(crate) fn is_index_in_range(&self, index: I) -> bool {
        (self.tail <= index) & (index < self.head) & (self.len > I::zero())
    }

    /// First half of a push: counts the element and moves `head` one past
    /// the slot being written, without reducing it.
    #[inline]
    fn open_head(&mut self) {
        self.len = self.len.wrapping_add(&I::one());
        self.head = self.head + I::one();
    }

    /// Second half of a push: folds `head` back into `[0, capacity)`.
    #[inline]
    fn close_head(&mut self, capacity: I) {
        self.head = self.head % capacity;
    }

    #[inline]
    fn advance_tail(&mut self, capacity: I) {
        self.len = self.len.wrapping_sub(&I::one());
        self.tail = (self.tail + I::one()) % capacity;
    }
}

/// Occupancy of a ring as seen through its length counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingState {
    /// `len == 0`
    Empty,
    /// `0 < len < capacity`
    Partial,
    /// `len == capacity`
    Full,
    /// `len` is negative or above capacity. Only reachable by pushing into
    /// a full or popping from an empty unchecked ring.
    Overrun,
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Operations shared by [`UncheckedRing`](crate::UncheckedRing) and
/// [`CheckedRing`](crate::CheckedRing).
///
/// Variants only decide how [`get`](RingBuffer::get) and
/// [`put`](RingBuffer::put) treat an index. Everything else, `push` and `pop`
/// included, is written once in terms of those two, so the validation of the
/// active variant carries over to the whole surface.
///
/// Positions are absolute: slot `index mod capacity` backs position `index`.
pub trait RingBuffer: sealed::Sealed {
    /// Element type. Reads hand out copies, so stale slots stay readable.
    type Item: Copy;
    /// Position, cursor and counter type.
    type Index: RingIndex;
    /// Failure of an indexed access.
    type Error;

    /// Reads position `index`.
    fn get(&self, index: Self::Index) -> Result<Self::Item, Self::Error>;

    /// Writes `value` at position `index` and returns it.
    fn put(&mut self, index: Self::Index, value: Self::Item) -> Result<Self::Item, Self::Error>;

    /// Number of slots. Fixed for the lifetime of the ring.
    fn capacity(&self) -> Self::Index;

    #[doc(hidden)]
    fn cursors(&self) -> &Cursors<Self::Index>;

    #[doc(hidden)]
    fn cursors_mut(&mut self) -> &mut Cursors<Self::Index>;

    /// Value of the length counter.
    ///
    /// Equals the number of live elements only if callers never push into a
    /// full ring nor pop from an empty one. It is never clamped.
    #[inline]
    fn len(&self) -> Self::Index {
        self.cursors().len
    }

    /// Slot the next push writes to.
    #[inline]
    fn head_position(&self) -> Self::Index {
        self.cursors().head
    }

    /// Slot the next pop reads from.
    #[inline]
    fn tail_position(&self) -> Self::Index {
        self.cursors().tail
    }

    /// Returns whether `tail <= index < head` and `len > 0`.
    ///
    /// The cursors are compared as stored. Once `head` has wrapped around
    /// below `tail` no index passes, even though live elements remain.
    #[inline]
    fn is_index_in_range(&self, index: Self::Index) -> bool {
        self.cursors().is_index_in_range(index)
    }

    /// Returns `true` if the counter is zero.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len().is_zero()
    }

    /// Returns `true` if the counter has reached capacity.
    #[inline]
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Classifies the counter against the capacity.
    fn state(&self) -> RingState {
        let len = self.len();
        if len.is_zero() {
            RingState::Empty
        } else if len.is_negative() || len > self.capacity() {
            RingState::Overrun
        } else if len == self.capacity() {
            RingState::Full
        } else {
            RingState::Partial
        }
    }

    /// Reads the slot under the head cursor.
    ///
    /// That slot holds the next write target, so on a ring that is not full
    /// this is a stale or default value.
    #[inline]
    fn head(&self) -> Result<Self::Item, Self::Error> {
        self.get(self.head_position())
    }

    /// Reads the oldest element without removing it.
    #[inline]
    fn tail(&self) -> Result<Self::Item, Self::Error> {
        self.get(self.tail_position())
    }

    /// Appends `value` at the head cursor and returns it.
    ///
    /// The write goes through [`put`](RingBuffer::put) while the ring already
    /// reflects the push: the counter is incremented and `head` sits one past
    /// the written slot. If `put` fails the cursors are restored.
    #[inline]
    fn push(&mut self, value: Self::Item) -> Result<Self::Item, Self::Error> {
        let before = *self.cursors();
        self.cursors_mut().open_head();
        match self.put(before.head, value) {
            Ok(value) => {
                let capacity = self.capacity();
                self.cursors_mut().close_head(capacity);
                Ok(value)
            }
            Err(err) => {
                *self.cursors_mut() = before;
                Err(err)
            }
        }
    }

    /// Removes and returns the element under the tail cursor.
    #[inline]
    fn pop(&mut self) -> Result<Self::Item, Self::Error> {
        let value = self.get(self.tail_position())?;
        let capacity = self.capacity();
        self.cursors_mut().advance_tail(capacity);
        Ok(value)
    }
}

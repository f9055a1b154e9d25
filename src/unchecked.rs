use core::convert::Infallible;

use log::debug;

use crate::checked::CheckedRing;
use crate::error::CapacityError;
use crate::index::{DefaultIndex, RingIndex};
use crate::ring_buffer::{sealed, Cursors, RingBuffer};

/// Ring buffer that performs no validation at all.
///
/// Every access maps position `index` to slot `index mod capacity` and
/// touches it unconditionally. Pushing into a full ring overwrites the oldest
/// element, popping from an empty ring returns whatever the tail slot holds
/// and drives [`len`](RingBuffer::len) negative. Callers are expected to
/// check [`is_full`](RingBuffer::is_full) and
/// [`is_empty`](RingBuffer::is_empty) themselves.
///
/// The inherent methods return `T` directly. Through the [`RingBuffer`]
/// trait the same operations return `Result<T, Infallible>`.
#[derive(Debug, Clone)]
pub struct UncheckedRing<T, I = DefaultIndex> {
    storage: Box<[T]>,
    capacity: I,
    cursors: Cursors<I>,
}

impl<T: Copy + Default, I: RingIndex> UncheckedRing<T, I> {
    /// Creates a ring of `capacity` slots, each set to `T::default()`.
    ///
    /// This is the only allocation the ring ever performs.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        Self::build(vec![T::default(); capacity].into_boxed_slice(), "unchecked")
    }
}

impl<T: Copy, I: RingIndex> UncheckedRing<T, I> {
    /// Wraps caller-supplied storage; its length becomes the capacity.
    ///
    /// The existing slot contents are kept and are what reads of never
    /// written positions return.
    pub fn with_storage(storage: impl Into<Box<[T]>>) -> Result<Self, CapacityError> {
        Self::build(storage.into(), "unchecked")
    }

    /// Takes ownership of `storage` and logs the new ring once, under
    /// `variant`.
    pub(crate) fn build(storage: Box<[T]>, variant: &str) -> Result<Self, CapacityError> {
        let len = storage.len();
        if len == 0 {
            return Err(CapacityError::Zero);
        }
        let capacity = I::from_usize(len).ok_or(CapacityError::TooLarge { len })?;
        debug!("{} ring ready with {} slots", variant, len);
        Ok(Self {
            storage,
            capacity,
            cursors: Cursors::new(),
        })
    }

    /// Reads position `index`.
    #[inline]
    pub fn get(&self, index: I) -> T {
        let slot = index.slot(self.capacity);
        // Safety: slot < capacity == storage.len()
        unsafe { *self.storage.get_unchecked(slot) }
    }

    /// Writes `value` at position `index` and returns it.
    #[inline]
    pub fn put(&mut self, index: I, value: T) -> T {
        let slot = index.slot(self.capacity);
        // Safety: slot < capacity == storage.len()
        unsafe {
            *self.storage.get_unchecked_mut(slot) = value;
        }
        value
    }

    /// Reads the slot under the head cursor.
    #[inline]
    pub fn head(&self) -> T {
        self.get(self.cursors.head)
    }

    /// Reads the slot under the tail cursor.
    #[inline]
    pub fn tail(&self) -> T {
        self.get(self.cursors.tail)
    }

    /// Writes `value` at the head cursor, bumps the counter and advances
    /// the head. Never fails, even on a full ring.
    #[inline]
    pub fn push(&mut self, value: T) -> T {
        match RingBuffer::push(self, value) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Reads the tail slot, decrements the counter and advances the tail.
    /// Never fails, even on an empty ring.
    #[inline]
    pub fn pop(&mut self) -> T {
        match RingBuffer::pop(self) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Adds range validation on top of the same storage and cursors.
    pub fn into_checked(self) -> CheckedRing<T, I> {
        CheckedRing::from(self)
    }

    /// Gives the storage back, in slot order.
    pub fn into_storage(self) -> Box<[T]> {
        self.storage
    }
}

impl<T, I> sealed::Sealed for UncheckedRing<T, I> {}

impl<T: Copy, I: RingIndex> RingBuffer for UncheckedRing<T, I> {
    type Item = T;
    type Index = I;
    type Error = Infallible;

    #[inline]
    fn capacity(&self) -> I {
        self.capacity
    }

    #[inline]
    fn cursors(&self) -> &Cursors<I> {
        &self.cursors
    }

    #[inline]
    fn cursors_mut(&mut self) -> &mut Cursors<I> {
        &mut self.cursors
    }

    #[inline]
    fn get(&self, index: I) -> Result<T, Infallible> {
        Ok(UncheckedRing::get(self, index))
    }

    #[inline]
    fn put(&mut self, index: I, value: T) -> Result<T, Infallible> {
        Ok(UncheckedRing::put(self, index, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring_buffer::RingState;

    #[test]
    fn test_create_ring() {
        let r: UncheckedRing<u32, i32> = UncheckedRing::new(3).unwrap();
        assert_eq!(r.capacity(), 3);
        assert_eq!(r.len(), 0);
        assert!(r.is_empty());
        assert!(!r.is_full());
        assert_eq!(r.state(), RingState::Empty);
    }

    #[test]
    fn test_create_with_zero_capacity() {
        let result = UncheckedRing::<u32, i32>::new(0);
        assert_eq!(result.unwrap_err(), CapacityError::Zero);

        let result = UncheckedRing::<u32, i32>::with_storage(Vec::new());
        assert_eq!(result.unwrap_err(), CapacityError::Zero);
    }

    #[test]
    fn test_storage_too_large_for_index() {
        let len = i32::MAX as usize + 1;
        let mut storage: Vec<()> = Vec::with_capacity(len);
        // Safety: zero-sized elements need no initialization
        unsafe { storage.set_len(len) };
        let result = UncheckedRing::<(), i32>::with_storage(storage);
        assert_eq!(result.unwrap_err(), CapacityError::TooLarge { len });
    }

    #[test]
    fn test_wrap_caller_storage() {
        let mut r: UncheckedRing<u8, i64> = UncheckedRing::with_storage([7u8, 8, 9]).unwrap();
        assert_eq!(r.capacity(), 3);
        assert_eq!(r.get(1), 8);
        r.push(1);
        assert_eq!(&*r.into_storage(), &[1, 8, 9]);
    }

    #[test]
    fn test_push_and_pop() {
        let mut r: UncheckedRing<u32, i32> = UncheckedRing::new(3).unwrap();
        assert_eq!(r.push(0), 0);
        assert_eq!(r.push(1), 1);
        assert_eq!(r.state(), RingState::Partial);
        assert!(r.is_index_in_range(0));
        assert!(r.is_index_in_range(1));
        assert!(!r.is_index_in_range(2));
        assert_eq!(r.push(2), 2);
        assert!(r.is_full());
        assert_eq!(r.state(), RingState::Full);
        // head wrapped back to 0
        assert_eq!(r.head_position(), 0);
        assert!(!r.is_index_in_range(0));

        assert_eq!(r.pop(), 0);
        assert_eq!(r.pop(), 1);
        assert_eq!(r.pop(), 2);
        assert!(r.is_empty());
        assert_eq!((r.head_position(), r.tail_position()), (0, 0));
    }

    #[test]
    fn test_read_head_and_tail() {
        let mut r: UncheckedRing<u32, i32> = UncheckedRing::new(3).unwrap();
        r.push(5);
        r.push(6);
        assert_eq!(r.tail(), 5);
        // head slot has not been written yet
        assert_eq!(r.head(), 0);
        r.pop();
        assert_eq!(r.tail(), 6);
    }

    #[test]
    fn test_get_reduces_any_index() {
        let mut r: UncheckedRing<u32, i32> = UncheckedRing::new(4).unwrap();
        r.put(2, 42);
        assert_eq!(r.get(2), 42);
        assert_eq!(r.get(6), 42);
        assert_eq!(r.get(-2), 42);
        assert_eq!(r.put(-1, 9), 9);
        assert_eq!(r.get(3), 9);
    }

    #[test]
    fn test_pop_from_empty() {
        let mut r: UncheckedRing<u32, i32> = UncheckedRing::new(2).unwrap();
        assert_eq!(r.pop(), 0);
        assert_eq!(r.len(), -1);
        assert_eq!(r.state(), RingState::Overrun);
        assert!(!r.is_empty());
        assert!(!r.is_full());
        r.push(3);
        assert_eq!(r.len(), 0);
        assert_eq!(r.get(0), 3);
    }

    #[test]
    fn test_push_into_full() {
        let mut r: UncheckedRing<u32, i32> = UncheckedRing::new(2).unwrap();
        r.push(1);
        r.push(2);
        r.push(3);
        assert_eq!(r.len(), 3);
        assert_eq!(r.state(), RingState::Overrun);
        assert_eq!(r.tail(), 3);
        assert_eq!(r.head_position(), 1);
    }

    #[test]
    fn test_trait_surface_is_infallible() {
        fn drain<R: RingBuffer<Item = u32>>(ring: &mut R) -> Vec<u32> {
            let mut out = Vec::new();
            while !ring.is_empty() {
                if let Ok(v) = ring.pop() {
                    out.push(v);
                }
            }
            out
        }

        let mut r: UncheckedRing<u32, i64> = UncheckedRing::new(4).unwrap();
        for v in [4, 5, 6] {
            r.push(v);
        }
        assert_eq!(drain(&mut r), vec![4, 5, 6]);
    }
}

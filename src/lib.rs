//! # batchring - fixed-capacity ring buffers for batch ingestion
//!
//! Building block for pipelines that stage rows or ticks before handing
//! batches to a columnar consumer.
//!
//! ## Design
//!
//! - Storage is allocated once, at construction, or supplied by the caller
//! - Absolute positions map to slots by `index mod capacity`
//! - `head` and `tail` cursors always stay in `[0, capacity)`
//! - The length counter is informational and never clamped
//! - [`UncheckedRing`] validates nothing; [`CheckedRing`] wraps it and
//!   rejects out-of-range indexes with [`IndexError`]
//! - `push`/`pop` live once in the [`RingBuffer`] trait, on top of each
//!   variant's `get`/`put`
//! - Index width is a type parameter ([`RingIndex`]); the `compat` feature
//!   makes [`DefaultIndex`] an `i32`
//!
//! Neither variant is synchronized. Share across threads behind a lock.
//!
//! ## Example
//!
//! ```
//! use batchring::{CheckedRing, IndexError, RingBuffer, UncheckedRing};
//!
//! // Producer side: the caller guards against overrun.
//! let mut ring: UncheckedRing<u64> = UncheckedRing::new(4).unwrap();
//! for tick in [101, 102, 103] {
//!     if !ring.is_full() {
//!         ring.push(tick);
//!     }
//! }
//! assert_eq!(ring.pop(), 101);
//!
//! // Same layout, validated access.
//! let mut ring = ring.into_checked();
//! assert_eq!(ring.get(1), Ok(102));
//! assert_eq!(ring.get(0), Err(IndexError { index: 0 }));
//! ```

#![warn(missing_docs)]

mod checked;
mod error;
mod index;
mod ring_buffer;
mod unchecked;

pub use checked::CheckedRing;
pub use error::{CapacityError, IndexError};
pub use index::{DefaultIndex, RingIndex};
pub use ring_buffer::{RingBuffer, RingState};
pub use unchecked::UncheckedRing;

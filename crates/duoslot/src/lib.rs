//! Adaptive growable sequences.
//!
//! [`TwoSlotList`] stores up to two elements in inline slots and moves to
//! a heap buffer on the third insert. Removals that bring it back to two
//! elements or fewer move the survivors inline again and release the
//! buffer. [`ArrayList`] is the plain buffer-backed baseline and
//! [`AnyList`] picks one of the two at runtime.
//!
//! All three implement [`Sequence`] and share the same trait surface:
//! borrowing and owning iteration, a forward [`Cursor`] and a
//! bidirectional [`ListCursor`], structural equality and hashing, and an
//! optional [`ListObserver`] notified of every operation.
//!
//! # Storage modes
//!
//! | Mode | Elements | Storage |
//! |------|----------|---------|
//! | [`Mode::Empty`] | 0 | inline |
//! | [`Mode::Inline1`] | 1 | inline |
//! | [`Mode::Inline2`] | 2 | inline |
//! | [`Mode::Dynamic`] | any | heap buffer |
//!
//! Buffer growth takes `max(capacity * 2, required)`; promotion allocates
//! exactly three slots unless more were reserved.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod any;
pub mod array;
mod cell;
pub mod compliance;
pub mod cursor;
pub mod iter;
mod observe;
pub mod policy;
mod surface;
pub mod two_slot;

pub use any::{AnyList, ListKind};
pub use array::ArrayList;
pub use cell::INLINE_CAPACITY;
pub use cursor::{Cursor, ListCursor};
pub use duoslot_core::{
    IndexBound, ListConfig, ListError, ListObserver, Mode, NoopObserver, OpKind, Sequence,
};
pub use iter::Iter;
pub use policy::CapacityPolicy;
pub use two_slot::TwoSlotList;

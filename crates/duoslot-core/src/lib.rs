//! Core types and traits for the duoslot adaptive sequence containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! contract every list variant implements ([`Sequence`]), the storage
//! [`Mode`] it reports, the shared [`ListError`] enum, [`ListConfig`],
//! and the observer interface used by statistics collectors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod observer;
pub mod sequence;

pub use config::ListConfig;
pub use error::{IndexBound, ListError};
pub use observer::{ListObserver, NoopObserver, OpKind};
pub use sequence::{Mode, Sequence};

//! Owning containers: a growable array (`DynArray`) and a binary min/max heap
//! (`Heap`) that stores its tree inside one.
//!
//! Neither container is synchronized. Share one across threads only behind a
//! lock that covers the whole instance.

pub mod array;
pub mod config;
pub mod error;
pub mod heap;

#[cfg(test)]
mod testing;

pub use crate::array::DynArray;
pub use crate::config::ArrayConfig;
pub use crate::error::Error;
pub use crate::heap::{Elem, Heap, HeapOrder, Max, MaxHeap, Min, MinHeap, Order};

// priority of a heap entry; ordering is by this value alone
pub type Priority = u64;

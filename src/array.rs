//! `DynArray` is an owning, growable, index-addressable sequence.
//!
//! The array owns every value stored in it. Values are moved in by `push`,
//! `insert` and `set`, and ownership moves back out to the caller through the
//! `pop_*` family. Anything still stored when the array is dropped is dropped
//! with it.
//!
//! Capacity is tracked explicitly, separately from the allocation that backs
//! it. It only grows, except that it resets to zero (and the buffer is freed)
//! when a pop leaves the array empty.

use crate::config::ArrayConfig;
use crate::error::Error;
use core::fmt::{Debug, Formatter};
use log::trace;

pub struct DynArray<T> {
    items: Vec<T>,
    /// Slots reserved for this array. `items.len() <= capacity`, and the
    /// allocation behind `items` always holds at least `capacity` slots, so
    /// pushes below `capacity` never reallocate.
    capacity: usize,
    growth_increment: usize,
}

fn alloc_failed(requested: usize) -> Error {
    Error::AllocFailed { requested }
}

impl<T> DynArray<T> {
    /// Creates an empty array. Nothing is allocated until the first insert.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
            growth_increment: ArrayConfig::DEFAULT_GROWTH_INCREMENT,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::with_config(&ArrayConfig::new(capacity))
    }

    pub fn with_config(config: &ArrayConfig) -> Result<Self, Error> {
        let mut array = Self {
            items: Vec::new(),
            capacity: 0,
            growth_increment: config.effective_increment(),
        };
        if config.initial_capacity != 0 {
            array.grow(config.initial_capacity)?;
        }
        Ok(array)
    }

    /// Increases the capacity by `additional` slots, or by the configured
    /// growth increment if `additional` is zero. Existing elements are kept.
    ///
    /// On failure the array is left unchanged.
    pub fn grow(&mut self, additional: usize) -> Result<(), Error> {
        let additional = if additional == 0 {
            self.growth_increment
        } else {
            additional
        };
        let new_capacity = self
            .capacity
            .checked_add(additional)
            .ok_or_else(|| alloc_failed(usize::MAX))?;
        self.items
            .try_reserve_exact(new_capacity - self.items.len())
            .map_err(|_| alloc_failed(new_capacity))?;
        trace!("grow: capacity {} -> {}", self.capacity, new_capacity);
        self.capacity = new_capacity;
        Ok(())
    }

    /// Makes room for one more element. Grows geometrically, so a run of
    /// appends costs amortized O(1) each.
    fn reserve_one(&mut self) -> Result<(), Error> {
        if self.items.len() < self.capacity {
            return Ok(());
        }
        let step = self.capacity.max(self.growth_increment);
        self.grow(step)
    }

    /// Appends `value` to the end of the array.
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        self.reserve_one()?;
        self.items.push(value);
        Ok(())
    }

    /// Inserts `value` at `pos`, shifting every element at `pos` or later one
    /// slot toward the end.
    ///
    /// If the array is empty, or `pos == len()`, this is an append. Any other
    /// `pos > len()` is rejected with `Error::InvalidPosition`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), Error> {
        let len = self.items.len();
        if len == 0 || pos == len {
            return self.push(value);
        }
        if pos > len {
            return Err(Error::InvalidPosition { pos, len });
        }
        self.reserve_one()?;
        self.items.insert(pos, value);
        Ok(())
    }

    /// Replaces the element at `pos`. The previous element is dropped.
    pub fn set(&mut self, pos: usize, value: T) -> Result<(), Error> {
        let len = self.items.len();
        match self.items.get_mut(pos) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfRange { index: pos, len }),
        }
    }

    /// Exchanges the elements at `a` and `b` in place.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), Error> {
        let len = self.items.len();
        for &index in [a, b].iter() {
            if index >= len {
                return Err(Error::IndexOutOfRange { index, len });
            }
        }
        self.items.swap(a, b);
        Ok(())
    }

    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.items.iter().for_each(f);
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        self.items.get(pos)
    }

    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.items.get_mut(pos)
    }

    /// Removes the first element; later elements shift down one slot.
    pub fn pop_front(&mut self) -> Option<T> {
        self.pop_at(0)
    }

    /// Removes the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        let value = self.items.pop()?;
        self.release_if_empty();
        Some(value)
    }

    /// Removes the element at `pos`; later elements shift down one slot.
    /// Returns `None` if `pos` does not name an element.
    pub fn pop_at(&mut self, pos: usize) -> Option<T> {
        if pos >= self.items.len() {
            return None;
        }
        let value = self.items.remove(pos);
        self.release_if_empty();
        Some(value)
    }

    fn release_if_empty(&mut self) {
        if self.items.is_empty() && self.capacity != 0 {
            trace!("release: array is empty, freeing {} slots", self.capacity);
            self.items = Vec::new();
            self.capacity = 0;
        }
    }

    /// Drops every element and frees the buffer.
    pub fn clear(&mut self) {
        self.items.clear();
        self.release_if_empty();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().cloned());
        Self {
            items,
            capacity: self.capacity,
            growth_increment: self.growth_increment,
        }
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            capacity: items.capacity(),
            items,
            growth_increment: ArrayConfig::DEFAULT_GROWTH_INCREMENT,
        }
    }
}

impl<T> core::iter::FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.debug_list().entries(self.items.iter()).finish()
    }
}

#![doc = r###"

A binary heap ordered by an unsigned priority.

The tree is stored implicitly in a `DynArray`: the children of slot `i` are at
`2i + 1` and `2i + 2`, and the parent of slot `i` is at `(i - 1) / 2`. Each slot
holds an `Elem`, which pairs the caller's payload with its priority.

The heap owns every `Elem` it holds. `insert` moves the payload in; `pop` moves
the root `Elem` (and its payload) back out to the caller. Whatever is left when
the heap is dropped is dropped with it.

The direction of the ordering is a type parameter. `Heap<T, Min>` keeps the
smallest priority at the root and `Heap<T, Max>` keeps the largest. Both use the
same sift code; only `Order::precedes` differs.

"###]

use crate::array::DynArray;
use crate::config::ArrayConfig;
use crate::error::Error;
use crate::Priority;
use core::fmt::{Debug, Display, Formatter};
use core::marker::PhantomData;
use log::{debug, log_enabled, trace, Level};

fn left(parent: usize) -> usize {
    parent * 2 + 1
}
fn right(parent: usize) -> usize {
    parent * 2 + 2
}
fn parent(child: usize) -> usize {
    (child - 1) / 2
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeapOrder {
    Min,
    Max,
}

/// Chooses which of two priorities belongs closer to the root.
pub trait Order {
    const KIND: HeapOrder;

    /// Returns true if `a` must sit strictly above `b`.
    fn precedes(a: Priority, b: Priority) -> bool;
}

/// Smallest priority at the root.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Min;

/// Largest priority at the root.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Max;

impl Order for Min {
    const KIND: HeapOrder = HeapOrder::Min;
    fn precedes(a: Priority, b: Priority) -> bool {
        a < b
    }
}

impl Order for Max {
    const KIND: HeapOrder = HeapOrder::Max;
    fn precedes(a: Priority, b: Priority) -> bool {
        a > b
    }
}

/// One heap entry: a payload and the priority it is ordered by.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Elem<T> {
    payload: T,
    priority: Priority,
}

impl<T> Elem<T> {
    pub fn new(payload: T, priority: Priority) -> Self {
        Self { payload, priority }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Size of the payload in bytes.
    pub fn size(&self) -> usize {
        core::mem::size_of_val(&self.payload)
    }

    pub fn into_payload(self) -> T {
        self.payload
    }

    pub fn into_parts(self) -> (T, Priority) {
        (self.payload, self.priority)
    }
}

/// Moves the entry at `index` toward the root until its parent precedes it
/// (or it becomes the root).
fn sift_up<T, O: Order>(items: &mut [Elem<T>], mut index: usize) {
    while index > 0 {
        let parent = parent(index);
        if !O::precedes(items[index].priority, items[parent].priority) {
            break;
        }
        trace!("sift_up: {} <-> {}", index, parent);
        items.swap(index, parent);
        index = parent;
    }
}

/// Moves the entry at `index` toward the leaves until no child precedes it.
fn sift_down<T, O: Order>(items: &mut [Elem<T>], mut index: usize) {
    let len = items.len();
    loop {
        let left = left(index);
        if left >= len {
            break;
        }
        let right = right(index);
        let mut child = left;
        if right < len && O::precedes(items[right].priority, items[left].priority) {
            child = right;
        }
        if !O::precedes(items[child].priority, items[index].priority) {
            break;
        }
        trace!("sift_down: {} <-> {}", index, child);
        items.swap(index, child);
        index = child;
    }
}

pub struct Heap<T, O: Order = Min> {
    array: DynArray<Elem<T>>,
    order: PhantomData<O>,
}

pub type MinHeap<T> = Heap<T, Min>;
pub type MaxHeap<T> = Heap<T, Max>;

impl<T, O: Order> Heap<T, O> {
    pub fn new() -> Self {
        Self {
            array: DynArray::new(),
            order: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::with_config(&ArrayConfig::new(capacity))
    }

    pub fn with_config(config: &ArrayConfig) -> Result<Self, Error> {
        Ok(Self {
            array: DynArray::with_config(config)?,
            order: PhantomData,
        })
    }

    pub fn order(&self) -> HeapOrder {
        O::KIND
    }

    /// Inserts `payload` with the given priority.
    ///
    /// Fails only if the backing array cannot grow, in which case the heap is
    /// unchanged.
    pub fn insert(&mut self, payload: T, priority: Priority) -> Result<(), Error> {
        self.array.push(Elem::new(payload, priority))?;
        let last = self.array.len() - 1;
        sift_up::<T, O>(self.array.as_mut_slice(), last);
        debug_assert!(self.is_heap());
        Ok(())
    }

    /// Removes the root and hands it to the caller.
    pub fn pop(&mut self) -> Option<Elem<T>> {
        let len = self.array.len();
        if len == 0 {
            return None;
        }
        if len > 1 {
            self.swap(0, len - 1).ok()?;
        }
        let root = self.array.pop_back()?;
        if !self.array.is_empty() {
            sift_down::<T, O>(self.array.as_mut_slice(), 0);
        }
        debug_assert!(self.is_heap());
        Some(root)
    }

    /// Exchanges two entries in storage. Callers must restore the heap
    /// property afterward.
    fn swap(&mut self, a: usize, b: usize) -> Result<(), Error> {
        self.array.swap(a, b)
    }

    pub fn peek(&self) -> Option<&Elem<T>> {
        self.array.front()
    }

    /// Returns the priority stored at `index` in storage order.
    pub fn peek_priority(&self, index: usize) -> Option<Priority> {
        self.array.get(index).map(Elem::priority)
    }

    /// Visits every entry in storage order (not sorted).
    pub fn for_each<F: FnMut(&Elem<T>)>(&self, f: F) {
        self.array.for_each(f);
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Elem<T>> {
        self.array.iter()
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn clear(&mut self) {
        self.array.clear();
    }

    /// Drains the heap in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<Elem<T>> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(elem) = self.pop() {
            sorted.push(elem);
        }
        sorted
    }

    pub(crate) fn is_heap(&self) -> bool {
        let items = self.array.as_slice();
        (1..items.len()).all(|i| !O::precedes(items[i].priority, items[parent(i)].priority))
    }

    /// Draws the tree, one node per line, with box-drawing connectors.
    ///
    /// ```text
    /// 1
    /// ├── 3
    /// │   ├── 5
    /// │   └── 4
    /// └── 8
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.array.front() {
            out.push_str(&root.priority.to_string());
            out.push('\n');
            self.render_children(&mut out, 0, "");
        }
        out
    }

    fn render_children(&self, out: &mut String, index: usize, prefix: &str) {
        let len = self.array.len();
        let children = [left(index), right(index)];
        let children = children.iter().copied().filter(|&c| c < len);
        let count = children.clone().count();
        for (n, child) in children.enumerate() {
            let is_last = n + 1 == count;
            out.push_str(prefix);
            out.push_str(if is_last { "└── " } else { "├── " });
            out.push_str(&self.array.as_slice()[child].priority.to_string());
            out.push('\n');
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            self.render_children(out, child, &child_prefix);
        }
    }

    /// Writes `render()` to the log at debug level.
    pub fn log_tree(&self) {
        if log_enabled!(Level::Debug) {
            debug!("{:?} heap, {} entries:\n{}", O::KIND, self.len(), self.render());
        }
    }
}

impl<T, O: Order> Default for Heap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, O: Order> Clone for Heap<T, O> {
    fn clone(&self) -> Self {
        Self {
            array: self.array.clone(),
            order: PhantomData,
        }
    }
}

impl<T: Debug, O: Order> Debug for Heap<T, O> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "{:?} heap: ", O::KIND)?;
        for elem in self.array.iter() {
            write!(fmt, "{}:{:?} ", elem.priority, elem.payload)?;
        }
        Ok(())
    }
}

impl<T, O: Order> Display for Heap<T, O> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.write_str(&self.render())
    }
}

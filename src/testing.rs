use crate::heap::{Heap, Order};
use crate::Priority;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Builds a heap whose payloads are their own priorities.
pub fn heap_from<O: Order>(priorities: &[Priority]) -> Heap<Priority, O> {
    let mut heap = Heap::new();
    for &p in priorities.iter() {
        heap.insert(p, p).unwrap();
    }
    assert_eq!(heap.len(), priorities.len());
    heap
}

/// Pops everything, returning priorities in extraction order.
pub fn drain_priorities<T, O: Order>(heap: &mut Heap<T, O>) -> Vec<Priority> {
    let mut out = Vec::with_capacity(heap.len());
    while let Some(elem) = heap.pop() {
        out.push(elem.priority());
    }
    assert!(heap.pop().is_none());
    out
}

/*!
 * Node Arena
 * Slot-indexed backing store for linked queue nodes
 */

use crate::core::types::Value;
use crate::core::{QueueError, QueueResult};

/// Handle to a node in the arena.
pub(crate) type Slot = u32;

/// Sentinel slot: end of a chain, empty free list, unset head/tail.
pub(crate) const NIL: Slot = Slot::MAX;

/// A single chain cell: the stored value and the slot of its successor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub value: Value,
    pub next: Slot,
}

/// Node storage with O(1) allocate and release.
///
/// Nodes live in one contiguous vector and address each other by slot
/// instead of by pointer, so relinking is plain index assignment under the
/// borrow checker. Released slots are threaded into an intrusive free list
/// through their `next` field and reused LIFO, which keeps `release`
/// allocation-free.
///
/// # Performance
/// - Growth goes through `try_reserve`, so exhaustion surfaces as
///   `QueueError::OutOfMemory` instead of an abort
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
    free_head: Slot,
    free_len: usize,
}

impl NodeArena {
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_head: NIL,
            free_len: 0,
        }
    }

    /// Number of live (allocated and not released) nodes.
    pub fn live(&self) -> usize {
        self.nodes.len() - self.free_len
    }

    /// Guarantee room for `additional` more allocations.
    ///
    /// Slots already on the free list count toward the request, so after a
    /// successful call the next `additional` calls to `alloc` cannot fail.
    pub fn try_reserve(&mut self, additional: usize) -> QueueResult<()> {
        if additional <= self.free_len {
            return Ok(());
        }
        let fresh = additional - self.free_len;
        if self.nodes.len().saturating_add(fresh) >= NIL as usize {
            return Err(QueueError::OutOfMemory(format!(
                "slot space exhausted at {} nodes",
                self.nodes.len()
            )));
        }
        self.nodes
            .try_reserve(fresh)
            .map_err(|err| QueueError::OutOfMemory(err.to_string()))
    }

    /// Allocate a node holding `value`, reusing a released slot when one
    /// is available. The new node's `next` is `NIL`.
    pub fn alloc(&mut self, value: Value) -> QueueResult<Slot> {
        if self.free_head != NIL {
            let slot = self.free_head;
            self.free_head = self.nodes[slot as usize].next;
            self.free_len -= 1;
            self.nodes[slot as usize] = Node { value, next: NIL };
            return Ok(slot);
        }
        self.try_reserve(1)?;
        let slot = self.nodes.len() as Slot;
        self.nodes.push(Node { value, next: NIL });
        Ok(slot)
    }

    /// Return `slot` to the free list. No live chain may reference it
    /// afterwards.
    pub fn release(&mut self, slot: Slot) {
        debug_assert_ne!(slot, NIL, "released the nil slot");
        self.nodes[slot as usize].next = self.free_head;
        self.free_head = slot;
        self.free_len += 1;
    }

    /// Release everything at once, keeping the backing storage.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_head = NIL;
        self.free_len = 0;
    }

    #[inline]
    pub fn value(&self, slot: Slot) -> Value {
        self.nodes[slot as usize].value
    }

    #[inline]
    pub fn set_value(&mut self, slot: Slot, value: Value) {
        self.nodes[slot as usize].value = value;
    }

    #[inline]
    pub fn next(&self, slot: Slot) -> Slot {
        self.nodes[slot as usize].next
    }

    #[inline]
    pub fn set_next(&mut self, slot: Slot, next: Slot) {
        self.nodes[slot as usize].next = next;
    }
}

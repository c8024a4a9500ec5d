/*!
 * FIFO Queue
 * Singly-linked integer queue with O(1) push and pop
 */

use super::arena::{NodeArena, Slot, NIL};
use crate::core::types::{Index, Value};
use crate::core::{QueueError, QueueResult};
use std::fmt;

/// First-in-first-out queue of integers backed by a node arena.
///
/// The chain is singly linked head to tail. The struct keeps three facts
/// in sync at all times: `len == 0` exactly when `head` and `tail` are
/// both `NIL`; following `next` from `head` visits exactly `len` nodes
/// and ends at `tail`; and `tail`'s `next` is `NIL`. Every operation
/// either upholds these or returns an error leaving the queue untouched.
///
/// Slots are an internal detail and never appear in the public API.
pub struct Queue {
    pub(crate) arena: NodeArena,
    pub(crate) head: Slot,
    pub(crate) tail: Slot,
    pub(crate) len: usize,
}

impl Queue {
    /// Create an empty queue. Allocates nothing until the first push.
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Append `value` at the tail in O(1).
    ///
    /// # Errors
    /// `OutOfMemory` if node allocation fails; the queue is unmodified.
    pub fn push(&mut self, value: Value) -> QueueResult<()> {
        let slot = self.arena.alloc(value)?;
        if self.head == NIL {
            self.head = slot;
        } else {
            self.arena.set_next(self.tail, slot);
        }
        self.tail = slot;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the head value in O(1).
    ///
    /// # Errors
    /// `EmptyQueue` if there is nothing to remove.
    pub fn pop(&mut self) -> QueueResult<Value> {
        if self.len == 0 {
            return Err(QueueError::EmptyQueue);
        }
        let slot = self.head;
        let value = self.arena.value(slot);
        self.head = self.arena.next(slot);
        self.arena.release(slot);
        self.len -= 1;
        if self.head == NIL {
            self.tail = NIL;
        }
        Ok(value)
    }

    /// Overwrite the value at `index` (0 = head) in O(n).
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= len`; the queue is unmodified.
    pub fn edit_at(&mut self, index: Index, value: Value) -> QueueResult<()> {
        if index >= self.len {
            return Err(QueueError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let mut slot = self.head;
        for _ in 0..index {
            slot = self.arena.next(slot);
        }
        self.arena.set_value(slot, value);
        Ok(())
    }

    /// Value at the head without removing it.
    pub fn front(&self) -> Option<Value> {
        if self.head == NIL {
            None
        } else {
            Some(self.arena.value(self.head))
        }
    }

    /// Value at the tail without removing it.
    pub fn back(&self) -> Option<Value> {
        if self.tail == NIL {
            None
        } else {
            Some(self.arena.value(self.tail))
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate values head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            arena: &self.arena,
            slot: self.head,
            remaining: self.len,
        }
    }

    /// Snapshot the contents head to tail. Empty queue yields an empty
    /// vector.
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().collect()
    }

    /// Build a queue from a slice, preserving order.
    ///
    /// # Errors
    /// `OutOfMemory` if the nodes cannot be allocated.
    pub fn from_values(values: &[Value]) -> QueueResult<Self> {
        let mut queue = Self::new();
        queue.arena.try_reserve(values.len())?;
        for &value in values {
            queue.push(value)?;
        }
        Ok(queue)
    }

    /// Deep copy: same values, same order, no shared nodes.
    ///
    /// Capacity is reserved up front, so on failure nothing is leaked and
    /// no partial copy escapes.
    ///
    /// # Errors
    /// `OutOfMemory` if the copy cannot be allocated.
    pub fn copy(&self) -> QueueResult<Self> {
        let mut copy = Self::new();
        copy.arena.try_reserve(self.len)?;
        for value in self.iter() {
            copy.push(value)?;
        }
        Ok(copy)
    }

    /// Release every node and restore the empty state. Safe to call on an
    /// already-empty queue.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    /// Verify the structural invariants, panicking on violation.
    #[cfg(test)]
    pub(crate) fn assert_valid(&self) {
        assert_eq!(self.arena.live(), self.len, "live node count drifted");
        if self.len == 0 {
            assert_eq!(self.head, NIL, "empty queue with a head");
            assert_eq!(self.tail, NIL, "empty queue with a tail");
            return;
        }
        assert_ne!(self.head, NIL);
        assert_ne!(self.tail, NIL);
        let mut slot = self.head;
        let mut seen = 1;
        while self.arena.next(slot) != NIL {
            slot = self.arena.next(slot);
            seen += 1;
            assert!(seen <= self.len, "chain longer than len");
        }
        assert_eq!(seen, self.len, "chain shorter than len");
        assert_eq!(slot, self.tail, "chain does not end at tail");
        assert_eq!(self.arena.next(self.tail), NIL, "tail has a successor");
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Head-to-tail value iterator.
pub struct Iter<'a> {
    arena: &'a NodeArena,
    slot: Slot,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.slot == NIL {
            return None;
        }
        let value = self.arena.value(self.slot);
        self.slot = self.arena.next(self.slot);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Queue {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/*!
 * Quicksort
 * Linked-list quicksort that reorders by relinking nodes
 */

use crate::queue::arena::{NodeArena, Slot, NIL};
use crate::queue::Queue;
use log::debug;

/// Sort the queue ascending by relinking nodes around a pivot.
///
/// The pivot is the last node of each segment. Payloads never move;
/// ordering changes purely through `next` links, so head and tail are
/// reassigned once the chain is rebuilt. Equal values land on the right
/// of the pivot. No allocation takes place.
///
/// Recursion depth is O(log n) on random input and O(n) when a segment
/// is already sorted, since the last element is the worst possible
/// pivot there.
pub fn quick_sort(queue: &mut Queue) {
    if queue.len() < 2 {
        return;
    }
    debug!("Quicksort over {} elements", queue.len());

    queue.head = sort_segment(&mut queue.arena, queue.head, queue.tail);

    // The old tail can end up anywhere in the chain; rescan for the node
    // that now terminates it.
    let mut node = queue.head;
    while queue.arena.next(node) != NIL {
        node = queue.arena.next(node);
    }
    queue.tail = node;
}

/// Partition the segment `head..=tail` around `tail`'s value.
///
/// Nodes below the pivot stay in place; every other node is unlinked and
/// appended after a running end that starts at the pivot, preserving
/// encounter order on both sides. Returns the pivot together with the
/// segment's new head and new tail.
fn partition(arena: &mut NodeArena, head: Slot, tail: Slot) -> (Slot, Slot, Slot) {
    let pivot = tail;
    let pivot_value = arena.value(pivot);
    let mut new_head = NIL;
    let mut prev = NIL;
    let mut end = pivot;
    let mut cur = head;

    while cur != pivot {
        let next = arena.next(cur);
        if arena.value(cur) < pivot_value {
            if new_head == NIL {
                new_head = cur;
            }
            prev = cur;
        } else {
            if prev != NIL {
                arena.set_next(prev, next);
            }
            arena.set_next(cur, NIL);
            arena.set_next(end, cur);
            end = cur;
        }
        cur = next;
    }

    // Everything went right of the pivot.
    if new_head == NIL {
        new_head = pivot;
    }

    (pivot, new_head, end)
}

/// Sort the segment from `head` to `tail` (whose `next` must be `NIL`),
/// returning the segment's new head.
fn sort_segment(arena: &mut NodeArena, head: Slot, tail: Slot) -> Slot {
    if head == NIL || head == tail {
        return head;
    }

    let (pivot, mut new_head, new_tail) = partition(arena, head, tail);

    if new_head != pivot {
        // Cut the chain just before the pivot, sort the left part, then
        // splice it back in front of the pivot.
        let mut walk = new_head;
        while arena.next(walk) != pivot {
            walk = arena.next(walk);
        }
        arena.set_next(walk, NIL);

        new_head = sort_segment(arena, new_head, walk);

        let mut last = new_head;
        while arena.next(last) != NIL {
            last = arena.next(last);
        }
        arena.set_next(last, pivot);
    }

    let right_head = arena.next(pivot);
    let right = sort_segment(arena, right_head, new_tail);
    arena.set_next(pivot, right);

    new_head
}

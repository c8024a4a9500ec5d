/*!
 * Selection Sort
 * Value-swapping selection sort over the linked queue
 */

use crate::queue::arena::NIL;
use crate::queue::Queue;
use log::debug;

/// Sort the queue ascending by repeatedly swapping values into place.
///
/// Only payloads move: the node chain, head and tail are left exactly as
/// they were. The scan uses a strict `<`, so the leftmost minimum wins on
/// ties. Queues shorter than two elements are returned untouched.
///
/// # Performance
/// - O(n^2) comparisons, at most n-1 swaps, no allocation
pub fn selection_sort(queue: &mut Queue) {
    if queue.len() < 2 {
        return;
    }
    debug!("Selection sort over {} elements", queue.len());

    let mut current = queue.head;
    while current != NIL {
        let mut min = current;
        let mut runner = queue.arena.next(current);
        while runner != NIL {
            if queue.arena.value(runner) < queue.arena.value(min) {
                min = runner;
            }
            runner = queue.arena.next(runner);
        }

        if min != current {
            let a = queue.arena.value(current);
            let b = queue.arena.value(min);
            queue.arena.set_value(current, b);
            queue.arena.set_value(min, a);
        }

        current = queue.arena.next(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_ascending() {
        let mut queue = Queue::from_values(&[5, 1, 9, 2]).unwrap();
        selection_sort(&mut queue);
        assert_eq!(queue.to_vec(), vec![1, 2, 5, 9]);
        queue.assert_valid();
    }

    #[test]
    fn links_never_move() {
        let mut queue = Queue::from_values(&[3, 1, 2]).unwrap();
        let head_before = queue.head;
        let tail_before = queue.tail;

        selection_sort(&mut queue);

        assert_eq!(queue.head, head_before);
        assert_eq!(queue.tail, tail_before);
        assert_eq!(queue.to_vec(), vec![1, 2, 3]);
        queue.assert_valid();
    }

    #[test]
    fn handles_duplicates() {
        let mut queue = Queue::from_values(&[4, 2, 4, 1, 2]).unwrap();
        selection_sort(&mut queue);
        assert_eq!(queue.to_vec(), vec![1, 2, 2, 4, 4]);
    }

    #[test]
    fn sorted_input_is_untouched() {
        let mut queue = Queue::from_values(&[1, 2, 3, 4]).unwrap();
        selection_sort(&mut queue);
        assert_eq!(queue.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn reverse_input() {
        let mut queue = Queue::from_values(&[5, 4, 3, 2, 1]).unwrap();
        selection_sort(&mut queue);
        assert_eq!(queue.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn short_queues_are_no_ops() {
        let mut empty = Queue::new();
        selection_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = Queue::from_values(&[7]).unwrap();
        selection_sort(&mut single);
        assert_eq!(single.to_vec(), vec![7]);
        single.assert_valid();
    }

    #[test]
    fn negative_values() {
        let mut queue = Queue::from_values(&[0, -5, 3, -1]).unwrap();
        selection_sort(&mut queue);
        assert_eq!(queue.to_vec(), vec![-5, -1, 0, 3]);
    }
}

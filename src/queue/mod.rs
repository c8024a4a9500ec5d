/*!
 * Queue Module
 * Singly-linked FIFO queue over a slot arena
 */

pub(crate) mod arena;
pub mod fifo;

// Re-export public API
pub use fifo::{Iter, Queue};

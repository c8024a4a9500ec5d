/*!
 * Core Types
 * Common types shared across the queue, sort, and tool layers
 */

/// Element type stored in the queue.
///
/// Values are a fixed-width signed integer by contract; the queue is not
/// generic over its element type.
pub type Value = i64;

/// Position of an element in the queue, counted from the head.
pub type Index = usize;

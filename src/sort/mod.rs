/*!
 * Sort Module
 * Two in-place sorting strategies for the linked queue
 */

pub mod quick;
pub mod selection;

// Re-export public API
pub use quick::quick_sort;
pub use selection::selection_sort;

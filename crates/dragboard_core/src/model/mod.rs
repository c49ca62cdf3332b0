//! Board hierarchy domain model.
//!
//! # Responsibility
//! - Define the two-level item/sub-item structure every engine call consumes.
//! - Validate identity invariants whenever a snapshot enters the core.
//!
//! # Invariants
//! - Item ids are unique across the board.
//! - Sub-item ids are unique within their owning item only.
//! - A snapshot is never mutated after construction.

pub mod hierarchy;
pub mod item;
pub mod sample;

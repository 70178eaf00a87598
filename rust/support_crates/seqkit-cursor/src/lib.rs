//! Single-pass cursor and bounded buffering primitives.
//!
//! Every lookahead operator in `seqkit` is built from the two types in this crate:
//!
//! - [`Cursor`] - A fused, forward-only cursor that releases its source as soon as
//!   the source reports exhaustion
//! - [`BoundedQueue`] - A fixed-capacity FIFO used both as a ring buffer (push
//!   evicts the oldest element) and as a plain queue (push refuses when full)

pub mod bounded_queue;
pub mod cursor;

pub use bounded_queue::BoundedQueue;
pub use cursor::Cursor;

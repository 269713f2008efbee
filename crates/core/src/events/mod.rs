//! Domain events module.
//!
//! Provides domain event types, the sink trait for emitting events after
//! successful domain mutations, and a subscription registry for in-process
//! listeners. The presentation layer subscribes to trigger re-renders.

mod domain_event;
mod registry;
mod sink;

pub use domain_event::*;
pub use registry::*;
pub use sink::*;

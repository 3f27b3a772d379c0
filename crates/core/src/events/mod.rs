//! Domain events module.
//!
//! Event types and the sink trait used to announce completed mutations.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;

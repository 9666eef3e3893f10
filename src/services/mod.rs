mod cleanup_service_impl;
pub mod confirmation_gate;
mod object_service_impl;

pub use cleanup_service_impl::CleanupServiceImpl;
pub use confirmation_gate::{confirmation_gate, interpret_answer, GateDecision};
pub use object_service_impl::ObjectServiceImpl;

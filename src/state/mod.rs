//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State structs are provided as `RwSignal` contexts at mount so route
//! components share one store without prop drilling.

pub mod books;
pub mod session;

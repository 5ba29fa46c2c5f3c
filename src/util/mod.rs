//! Guard and token helpers shared by route components.

pub mod guard;
pub mod token;

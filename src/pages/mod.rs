//! Route components rendered by the router.

pub mod books;
pub mod login;

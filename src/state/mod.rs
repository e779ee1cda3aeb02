//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only shared state; it is injected through context
//! rather than held in a global.

pub mod session;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page asks the route guard what to do with the current session and
//! delegates rendering details to `components`.

pub mod home;
pub mod login;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page composes section components; pages own no state of their own.

pub mod home;
pub mod not_found;

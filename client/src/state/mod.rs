//! Transient client-side UI state.
//!
//! DESIGN
//! ======
//! State is split by concern (`nav`, `contact`, `toast`, `reveal`) so each
//! section depends on a small focused model. None of it outlives the page.

pub mod contact;
pub mod nav;
pub mod reveal;
pub mod toast;

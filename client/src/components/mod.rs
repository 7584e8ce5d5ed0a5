//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section is a self-contained rendering unit with its own reveal
//! signal. Only `navigation` and `contact` read shared context (scroll state
//! and the toast queue).

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod navigation;
pub mod projects;
pub mod section_heading;
pub mod skills;
pub mod toaster;

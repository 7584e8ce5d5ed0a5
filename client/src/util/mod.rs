//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and animation tables
//! from section components to improve reuse and testability.

pub mod animation;
pub mod browser;
pub mod in_view;

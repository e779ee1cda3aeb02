//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route policy lives here so both pages apply identical redirect behavior.

pub mod guard;

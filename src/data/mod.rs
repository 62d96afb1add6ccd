//! Data layer - Pure state without UI coupling
//!
//! This module contains all the interaction state as pure data structures.
//! NO imports from frontend/ or any rendering code.
//! Frontends read from these structures to render.

pub mod persona;
pub mod ui_state;

pub use persona::*;
pub use ui_state::*;

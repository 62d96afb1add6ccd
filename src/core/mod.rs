//! Core interaction logic layer
//!
//! This module contains all state management and the section transition
//! machinery. NO imports from frontend/ or rendering code.
//! Core updates data structures in the data layer, frontends read and render.

pub mod app_core;
pub mod input_router;
pub mod transition;

pub use app_core::{AppCore, ChatNavigator, LoggingNavigator};
pub use input_router::{route_key, AppAction};
pub use transition::{SectionState, TransitionController};

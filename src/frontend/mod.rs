//! Frontend abstraction layer
//!
//! Defines the `Frontend` trait the terminal frontend implements. Rendering
//! reads from `AppCore`; input comes back as frontend-agnostic events.

pub mod events;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait - separates rendering concerns from interaction logic
pub trait Frontend {
    /// Poll for pending user input events, converted to `FrontendEvent`s
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state.
    ///
    /// Takes the core mutably: rendering records panel content heights and
    /// the click hit-map on the way through.
    fn render(&mut self, core: &mut AppCore) -> Result<()>;

    /// Restore the terminal and perform any necessary cleanup
    fn cleanup(&mut self) -> Result<()>;

    /// Current rendering area size
    fn size(&self) -> (u16, u16);
}

//! Terminal rendering.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//!                  │
//!                  └→ WidgetLayout ← hit-testing for mouse clicks
//! ```
//!
//! # Modules
//!
//! - [`layout`]: geometry shared by rendering and hit-testing
//! - [`viewmodel`]: display-ready state
//! - [`renderer`]: top-level rendering entry point
//! - [`components`]: header, control, option list, footer
//! - [`helpers`]: cursor movement, width-aware text, match highlighting
//! - [`theme`]: color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{Hit, LayoutInput, WidgetLayout};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ChipItem, ControlInfo, DisplayItem, DropdownInfo, FooterInfo, HeaderInfo, InfoRow, InputInfo,
    UIViewModel,
};

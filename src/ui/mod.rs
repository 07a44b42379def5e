//! Terminal presentation: view model, palette, and renderer.

pub mod render;
pub mod theme;
pub mod view;

pub use render::Renderer;
pub use theme::{Palette, ThemeToken};
pub use view::{DashboardView, LinkTab};

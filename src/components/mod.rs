//! The components module contains all shared components for our app.

mod app;
mod icons;
mod player;
mod sidebar;
mod video_manager;

pub use app::*;
pub use icons::*;
pub use player::*;
pub use sidebar::*;
pub use video_manager::*;

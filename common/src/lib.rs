pub mod config;
pub mod nav;
pub mod route;
pub mod structs;

pub use config::{ConfigWarning, NavConfig};
pub use nav::{activate, follows_in_place, PanelController, Router};
pub use route::{active_entry, is_active, project_links};

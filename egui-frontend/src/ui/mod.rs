pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod navigation;

pub use app_state::*;
pub use components::*;

pub mod api;
pub mod components;
pub mod format;
pub mod view_state;

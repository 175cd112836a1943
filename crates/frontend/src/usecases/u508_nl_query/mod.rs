pub mod api;
pub mod controls;
pub mod state;
pub mod view;

pub use view::QueryConsole;

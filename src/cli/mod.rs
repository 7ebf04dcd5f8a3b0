pub mod menu;
pub mod setup;
pub mod summary;
pub mod ui;

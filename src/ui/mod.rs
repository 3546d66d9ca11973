pub mod actions;
pub mod menu;
pub mod messages;

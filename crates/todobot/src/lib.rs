pub mod bot;
pub mod config;
pub mod console;
pub mod logo;

pub mod api;
pub mod config;
pub mod editor;
pub mod engine;
pub mod init;
pub mod messaging;
pub mod store;

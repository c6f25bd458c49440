pub mod config;
pub mod init;
pub mod logging;
pub mod store;
pub mod web;

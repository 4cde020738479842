pub mod app;
pub mod booking;
pub mod catalog;
pub mod components;
pub mod config;
pub mod state;

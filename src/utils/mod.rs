pub mod config;
pub mod data_loader;
pub mod error;
pub mod rating_utils;

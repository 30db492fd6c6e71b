//! Board configuration and resource assignment
pub mod config;
pub mod resources;

//! Hosts - toggle blocking of hostnames managed in the hosts file.

pub mod cli;
pub mod config;
pub mod error;
pub mod hosts;
pub mod managed;
pub mod store;

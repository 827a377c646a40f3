//! CLI commands

pub mod add;
pub mod clear;
pub mod list;
pub mod menu;
pub mod modify;
pub mod search;
pub mod utils;

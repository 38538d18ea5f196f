pub mod api;
pub mod config;
pub mod domain;
pub mod output;
pub mod render;
pub mod run;
pub mod selection;
pub mod utils;

#[cfg(test)]
mod fixtures;

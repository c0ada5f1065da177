pub mod config;
pub mod errors;
pub mod helper;
pub mod modules;
pub mod pipeline;
pub mod utils;

pub mod cli;
pub mod config;
pub mod errors;
pub mod fragment;
pub mod handlers;
pub mod structs;


pub use {cli::*, config::*, errors::*, fragment::*, handlers::*, structs::*};

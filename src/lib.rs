pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod params;
pub mod server;
pub mod testing;
pub mod types;
pub mod usecases;

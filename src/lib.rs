pub mod amount;
pub mod config;
pub mod server;
pub mod tokens;
pub mod tools;

pub mod api_connection;
pub mod cli;
pub mod config;
pub mod normalizer;
pub mod prompt_builder;
pub mod records;
pub mod store;

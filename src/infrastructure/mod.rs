// src/infrastructure/mod.rs
pub mod config;
pub mod json_repository;
pub mod pdf_writer;
pub mod store;

pub use config::Config;
pub use json_repository::JsonRepository;
pub use store::{FileStore, KeyValueStore, MemoryStore};

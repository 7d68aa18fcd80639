// src/services/mod.rs
pub mod nim_client;
pub mod prompt;
pub mod relay;

// src/services/mod.rs
pub mod ask_client;
pub mod completion;
pub mod conversation;
pub mod demo;

// src/lib.rs

pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod persona;
pub mod session;
pub mod state;

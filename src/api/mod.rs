// src/api/mod.rs

pub mod http;
pub mod ws;

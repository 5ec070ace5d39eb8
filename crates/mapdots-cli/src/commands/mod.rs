//! Command handlers

pub mod config;
pub mod dot;
pub mod replay;
pub mod status;

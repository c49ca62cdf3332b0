//! Board use-case services.
//!
//! # Responsibility
//! - Own the current board snapshot on behalf of UI/FFI callers.
//! - Keep gesture and button wiring decoupled from the pure engines.

pub mod board_service;

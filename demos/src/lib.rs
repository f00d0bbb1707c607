//! Shared helpers for the tsprep demo programs.

pub mod common;

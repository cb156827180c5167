//! Command handlers.

pub mod init;

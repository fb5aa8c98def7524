//! Shared utilities for the Agora workspace.

pub mod logger;

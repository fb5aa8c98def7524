//! Infrastructure layer: wire formats for the transport adapter.

pub mod dto;

//! Types shared across the config and GUI layers

pub mod color;

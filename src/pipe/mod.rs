//! Host communication over Zellij pipes.
//!
//! - `messages`: pipe command decoding and selection encoding

pub mod messages;

pub use messages::{encode_selection, PipeCommand, CHANGED_MESSAGE, PIPE_PREFIX};

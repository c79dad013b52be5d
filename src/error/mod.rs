// Copyright 2025 Gabriel Bjørnager Jensen.

//! Error types.

mod decode_error;

pub use decode_error::DecodeError;

// Copyright 2025 Gabriel Bjørnager Jensen.

//! `runedec` is a Rust crate for strict, octet-level decoding of UTF-8 runes.

#![no_std]

#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate self as runedec;

pub mod error;

mod rune;
mod utf8;

pub use rune::Rune;

// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(test)]

use crate::utf8::{is_utf8_continuation, utf8_sequence_len};

#[test]
fn test_utf8_sequence_len() {
	assert_eq!(utf8_sequence_len(0b00000000u8), Some(0x1));
	assert_eq!(utf8_sequence_len(0b01111111u8), Some(0x1));
	assert_eq!(utf8_sequence_len(0b11000000u8), Some(0x2));
	assert_eq!(utf8_sequence_len(0b11011111u8), Some(0x2));
	assert_eq!(utf8_sequence_len(0b11100000u8), Some(0x3));
	assert_eq!(utf8_sequence_len(0b11101111u8), Some(0x3));
	assert_eq!(utf8_sequence_len(0b11110000u8), Some(0x4));
	assert_eq!(utf8_sequence_len(0b11110111u8), Some(0x4));

	assert_eq!(utf8_sequence_len(0b10000000u8), None);
	assert_eq!(utf8_sequence_len(0b10111111u8), None);
	assert_eq!(utf8_sequence_len(0b11111000u8), None);
	assert_eq!(utf8_sequence_len(0b11111011u8), None);
	assert_eq!(utf8_sequence_len(0b11111111u8), None);
}

#[test]
fn test_is_utf8_continuation() {
	assert!( is_utf8_continuation(0b10000000u8));
	assert!( is_utf8_continuation(0b10101010u8));
	assert!( is_utf8_continuation(0b10111111u8));

	assert!(!is_utf8_continuation(0b00000000u8));
	assert!(!is_utf8_continuation(0b01111111u8));
	assert!(!is_utf8_continuation(0b11000000u8));
	assert!(!is_utf8_continuation(0b11111111u8));
}

// Copyright 2025 Gabriel Bjørnager Jensen.

use core::convert::Infallible;
use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A UTF-8 sequence could not be decoded into a rune.
///
/// Rejection tests are run in the order in which the variants are defined here, with at most one case being reported per call.
/// The stream is at no point consumed beyond the offending octet, and a rejected call never yields a partial rune.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub enum DecodeError {
	/// The provided octet stream was empty.
	EmptyInput,

	/// The first octet may not lead a sequence.
	///
	/// This covers stray continuation octets as well as the prefixes from `0xF8` and up, which would denote sequences of more than four octets.
	InvalidLeadByte,

	/// The octet stream terminates before the sequence prescribed by its lead octet.
	TruncatedSequence,

	/// An octet within the sequence is not a continuation octet.
	InvalidContinuationByte,

	/// The sequence spans more octets than its value requires.
	///
	/// Such encodings are valid transformations in a strictly mathematical sense, but are nonetheless forbidden by the UTF-8 definition.
	OverlongEncoding,

	/// The sequence encodes a UTF-16 surrogate half.
	///
	/// Surrogate points -- from U+D800 to U+DFFF -- are not themselves considered scalar values.
	SurrogateHalf,

	/// The sequence encodes a value greater than U+10FFFF.
	CodePointTooLarge,
}

impl Display for DecodeError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		let message = match *self {
			Self::EmptyInput              => "cannot decode rune from empty octet stream",
			Self::InvalidLeadByte         => "found octet that may not lead a utf-8 sequence",
			Self::TruncatedSequence       => "utf-8 sequence terminates prematurely",
			Self::InvalidContinuationByte => "found invalid utf-8 continuation octet",
			Self::OverlongEncoding        => "utf-8 sequence is overlong for its value",
			Self::SurrogateHalf           => "utf-8 sequence encodes surrogate half",
			Self::CodePointTooLarge       => "utf-8 sequence encodes value past the final code point",
		};

		f.write_str(message)
	}
}

impl Error for DecodeError { }

impl From<Infallible> for DecodeError {
	#[inline(always)]
	fn from(_value: Infallible) -> Self {
		unreachable!()
	}
}

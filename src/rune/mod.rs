// Copyright 2025 Gabriel Bjørnager Jensen.


mod serde;

use crate::error::DecodeError;
use crate::utf8::{is_utf8_continuation, utf8_sequence_len};

use core::fmt::{self, Debug, Display, Formatter};

#[cfg(feature = "oct")]
use {
	oct::decode::{self, Decode},
	oct::encode::{self, Encode, SizedEncode},
};

/// A single Unicode scalar value decoded from UTF-8.
///
/// This is in contrast to [`prim@char`] in that a rune also remembers the width of the sequence it was decoded from.
/// As only valid sequences yield runes, this width is always somewhere between one and four octets (or "bytes"), both inclusive.
///
/// Runes are constructed with the [`decode`](Self::decode) constructor, which strictly validates the provided octets instead of substituting U+FFFD `REPLACEMENT CHARACTER` on errors.
///
/// # Examples
///
/// Decoding the two-octet sequence for U+00A2 `CENT SIGN`:
///
/// ```rust
/// use runedec::Rune;
///
/// let rune = Rune::decode(b"\xC2\xA2").unwrap();
///
/// assert_eq!(rune,              '\u{00A2}');
/// assert_eq!(rune.code_point(), 0xA2);
/// assert_eq!(rune.len_utf8(),   0x2);
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rune {
	value: char,
	len:   u8,
}

impl Rune {
	/// Decodes a rune from the provided UTF-8 octets.
	///
	/// Only the first sequence is decoded; octets that follow it are wholly ignored and may take any value.
	/// The width of that sequence can afterwards be queried with [`len_utf8`](Self::len_utf8).
	///
	/// # Errors
	///
	/// The sequence is tested against the UTF-8 definition, with the first failed test being reported:
	///
	/// * [`EmptyInput`](DecodeError::EmptyInput) if `data` contains no octets at all;
	///
	/// * [`InvalidLeadByte`](DecodeError::InvalidLeadByte) if the first octet may not lead a sequence;
	///
	/// * [`TruncatedSequence`](DecodeError::TruncatedSequence) if `data` terminates before the sequence does;
	///
	/// * [`InvalidContinuationByte`](DecodeError::InvalidContinuationByte) if an octet within the sequence is not a continuation octet;
	///
	/// * [`OverlongEncoding`](DecodeError::OverlongEncoding) if the sequence is wider than its value requires;
	///
	/// * [`SurrogateHalf`](DecodeError::SurrogateHalf) if the sequence encodes a UTF-16 surrogate point;
	///
	/// * [`CodePointTooLarge`](DecodeError::CodePointTooLarge) if the sequence encodes a value past U+10FFFF.
	///
	/// # Examples
	///
	/// Decoding the four-octet sequence for U+1F44D `THUMBS UP SIGN`:
	///
	/// ```rust
	/// use runedec::Rune;
	///
	/// let rune = Rune::decode(b"\xF0\x9F\x91\x8D").unwrap();
	///
	/// assert_eq!(rune,            '\u{1F44D}');
	/// assert_eq!(rune.len_utf8(), 0x4);
	/// ```
	#[track_caller]
	pub const fn decode(data: &[u8]) -> Result<Self, DecodeError> {
		if data.is_empty() {
			return Err(DecodeError::EmptyInput);
		}

		let prefix = data[0x0];

		let Some(len) = utf8_sequence_len(prefix) else {
			return Err(DecodeError::InvalidLeadByte);
		};

		if len > data.len() {
			return Err(DecodeError::TruncatedSequence);
		}

		// Test the continuation octets before reassembling
		// the value. Octets past the sequence itself are
		// not our concern.

		let mut i = 0x1;
		while i < len {
			if !is_utf8_continuation(data[i]) {
				return Err(DecodeError::InvalidContinuationByte);
			}

			i += 0x1;
		}

		let value = match (len, data) {
			(0x1, &[o0, ..]) => {
				o0 as u32
			}

			(0x2, &[o0, o1, ..]) => {
				let mut value = 0x0;

				value |= (o0 as u32 ^ 0xC0) << 0x6;
				value |=  o1 as u32 ^ 0x80;

				value
			}

			(0x3, &[o0, o1, o2, ..]) => {
				let mut value = 0x0;

				value |= (o0 as u32 ^ 0xE0) << 0xC;
				value |= (o1 as u32 ^ 0x80) << 0x6;
				value |=  o2 as u32 ^ 0x80;

				value
			}

			(0x4, &[o0, o1, o2, o3, ..]) => {
				let mut value = 0x0;

				value |= (o0 as u32 ^ 0xF0) << 0x12;
				value |= (o1 as u32 ^ 0x80) << 0xC;
				value |= (o2 as u32 ^ 0x80) << 0x6;
				value |=  o3 as u32 ^ 0x80;

				value
			}

			// NOTE: `utf8_sequence_len` only yields lengths
			// from one to four, and we have just tested that
			// the sequence is terminated properly.
			_ => unreachable!(),
		};

		// Test that the value actually requires a sequence
		// of this width.

		let minimum = match len {
			0x1 => 0x0,
			0x2 => 0x80,
			0x3 => 0x800,
			_   => 0x10000,
		};

		if value < minimum {
			return Err(DecodeError::OverlongEncoding);
		}

		// The boundary prefixes `0xE0` and `0xF0` carry
		// null payloads, so for these the first continu-
		// ation octet denotes on its own whether the width
		// is required.

		if len > 0x1 {
			let next = data[0x1];

			if prefix == 0xE0 && next < 0xA0 || prefix == 0xF0 && next < 0x90 {
				return Err(DecodeError::OverlongEncoding);
			}
		}

		if matches!(value, 0xD800..=0xDFFF) {
			return Err(DecodeError::SurrogateHalf);
		}

		if value > 0x10FFFF {
			return Err(DecodeError::CodePointTooLarge);
		}

		debug_assert!(char::from_u32(value).is_some());

		// SAFETY: We have rejected every value that is not
		// a valid Unicode scalar, i.e. surrogate points and
		// values past U+10FFFF.
		let value = unsafe { char::from_u32_unchecked(value) };

		Ok(Self { value, len: len as u8 })
	}

	/// Constructs a rune directly from a character.
	#[inline(always)]
	#[must_use]
	pub(crate) const fn from_char(value: char) -> Self {
		Self { value, len: value.len_utf8() as u8 }
	}

	/// Gets the rune's code point.
	#[inline(always)]
	#[must_use]
	pub const fn code_point(self) -> u32 {
		self.value as u32
	}

	/// Converts the rune to a character.
	#[inline(always)]
	#[must_use]
	pub const fn to_char(self) -> char {
		self.value
	}

	/// Gets the width of the rune's UTF-8 sequence.
	///
	/// Remember that this value denotes the octet count of the sequence the rune was decoded from and **not** the total count of octets provided to [`decode`](Self::decode).
	#[inline(always)]
	#[must_use]
	pub const fn len_utf8(self) -> usize {
		self.len as usize
	}
}

impl Debug for Rune {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Debug::fmt(&self.value, f)
	}
}

impl Display for Rune {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Display::fmt(&self.value, f)
	}
}

#[cfg(feature = "oct")]
#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl Decode for Rune {
	type Error = <char as Decode>::Error;

	#[inline]
	#[track_caller]
	fn decode(input: &mut decode::Input) -> Result<Self, Self::Error> {
		let value = Decode::decode(input)?;

		Ok(Self::from_char(value))
	}
}

#[cfg(feature = "oct")]
#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl Encode for Rune {
	type Error = <char as Encode>::Error;

	/// Encodes using the same format as <code>&lt;[prim@char] as Encode&gt;::encode</code>.
	#[inline]
	#[track_caller]
	fn encode(&self, output: &mut encode::Output) -> Result<(), Self::Error> {
		self.value.encode(output)
	}
}

impl PartialEq<char> for Rune {
	#[inline(always)]
	fn eq(&self, other: &char) -> bool {
		self.value == *other
	}
}

impl PartialEq<Rune> for char {
	#[inline(always)]
	fn eq(&self, other: &Rune) -> bool {
		*self == other.value
	}
}

#[cfg(feature = "oct")]
#[cfg_attr(docsrs, doc(cfg(feature = "oct")))]
impl SizedEncode for Rune {
	const MAX_ENCODED_SIZE: usize = char::MAX_ENCODED_SIZE;
}

/// See [`to_char`](Rune::to_char).
impl From<Rune> for char {
	#[inline(always)]
	fn from(value: Rune) -> Self {
		value.to_char()
	}
}

/// See [`code_point`](Rune::code_point).
impl From<Rune> for u32 {
	#[inline(always)]
	fn from(value: Rune) -> Self {
		value.code_point()
	}
}

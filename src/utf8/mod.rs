// Copyright 2025 Gabriel Bjørnager Jensen.

mod test;

/// Classifies a lead octet, yielding the length of the sequence it prescribes.
///
/// Each UTF-8 sequence spans between one and four octets, as denoted by the prefix of its lead octet.
/// Octets that may not lead a sequence -- continuation octets and the values from `0xF8` and up -- do not prescribe any length.
#[inline]
#[must_use]
pub(crate) const fn utf8_sequence_len(prefix: u8) -> Option<usize> {
	match prefix {
		0b00000000..=0b01111111 => Some(0x1),
		0b11000000..=0b11011111 => Some(0x2),
		0b11100000..=0b11101111 => Some(0x3),
		0b11110000..=0b11110111 => Some(0x4),

		// NOTE: This also covers the prefixes that would
		// denote the five- and six-octet sequences of
		// UTF-8's pre-2003 definition.
		_ => None,
	}
}

/// Checks if the provided octet is a continuation octet.
///
/// By definition, the two greatest bits of any continuation octet are `10`.
#[inline(always)]
#[must_use]
pub(crate) const fn is_utf8_continuation(octet: u8) -> bool {
	octet & 0b11000000 == 0b10000000
}

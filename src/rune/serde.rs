// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(feature = "serde")]

use crate::Rune;

use core::fmt::{self, Formatter};
use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use serde::ser::{Serialize, Serializer};

#[derive(Debug, Default)]
struct RuneVisitor;

impl<'de> Visitor<'de> for RuneVisitor {
	type Value = Rune;

	#[inline]
	fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
		formatter.write_str("a character")
	}

	#[inline]
	fn visit_char<E: de::Error>(self, v: char) -> Result<Self::Value, E> {
		Ok(Rune::from_char(v))
	}

	// NOTE: Some formats do not distinguish between
	// characters and strings of width one.
	#[inline]
	fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
		let mut chars = v.chars();

		match (chars.next(), chars.next()) {
			(Some(c), None) => Ok(Rune::from_char(c)),

			_ => Err(E::invalid_value(Unexpected::Str(v), &self)),
		}
	}
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for Rune {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_char(RuneVisitor)
	}
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for Rune {
	#[inline]
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_char(self.to_char())
	}
}

/*
This code is part of the shapefile_codec library.
Created: 12/02/2026
Last Modified: 15/06/2026
License: MIT

Notes: The shapefile format addresses every length and offset in 16-bit
words, while the surrounding I/O works in bytes. Keeping the two units as
separate types makes the word/byte conversions explicit and checked at
construction instead of scattered `* 2` and `/ 2` arithmetic.
*/
use crate::error::{Error, Result};
use std::fmt;

/// A non-negative, even count of bytes.
///
/// Evenness is an invariant: anything a shapefile addresses is measured in
/// 16-bit words, so a byte length that cannot be halved exactly can never
/// describe valid content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteLength(i32);

impl ByteLength {
    pub fn new(value: i32) -> Result<ByteLength> {
        if value < 0 {
            return Err(Error::invalid(
                "byte length",
                format!("{} is negative", value),
            ));
        }
        if value % 2 != 0 {
            return Err(Error::invalid("byte length", format!("{} is odd", value)));
        }
        Ok(ByteLength(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn to_word_length(&self) -> WordLength {
        WordLength(self.0 / 2)
    }

    pub fn plus(&self, other: ByteLength) -> ByteLength {
        ByteLength(self.0 + other.0)
    }
}

impl fmt::Display for ByteLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative count of 16-bit words.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordLength(i32);

impl WordLength {
    /// Wraps a compile-time count of words known to be non-negative.
    pub(crate) const fn from_words(value: i32) -> WordLength {
        WordLength(value)
    }

    pub fn new(value: i32) -> Result<WordLength> {
        if value < 0 {
            return Err(Error::invalid(
                "word length",
                format!("{} is negative", value),
            ));
        }
        Ok(WordLength(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn to_byte_length(&self) -> ByteLength {
        ByteLength(self.0 * 2)
    }

    pub fn plus(&self, other: WordLength) -> WordLength {
        WordLength(self.0 + other.0)
    }

    pub fn plus_words(&self, words: i32) -> WordLength {
        WordLength(self.0 + words)
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative 16-bit-word offset marking where a record begins.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordOffset(i32);

impl WordOffset {
    /// Wraps a compile-time offset known to be non-negative.
    pub(crate) const fn from_words(value: i32) -> WordOffset {
        WordOffset(value)
    }

    pub fn new(value: i32) -> Result<WordOffset> {
        if value < 0 {
            return Err(Error::invalid(
                "word offset",
                format!("{} is negative", value),
            ));
        }
        Ok(WordOffset(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn plus(&self, length: WordLength) -> WordOffset {
        WordOffset(self.0 + length.value())
    }
}

impl fmt::Display for WordOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::{ByteLength, WordLength, WordOffset};

    #[test]
    fn test_byte_length_halves_into_words() {
        for n in (0..200).step_by(2) {
            let bl = ByteLength::new(n).unwrap();
            assert_eq!(bl.to_word_length().value(), n / 2);
            assert_eq!(bl.to_word_length().to_byte_length(), bl);
        }
    }

    #[test]
    fn test_byte_length_rejects_odd_and_negative() {
        assert!(ByteLength::new(3).is_err());
        assert!(ByteLength::new(-2).is_err());
        assert!(ByteLength::new(-1).is_err());
    }

    #[test]
    fn test_word_arithmetic() {
        let a = WordLength::new(4).unwrap();
        let b = WordLength::new(6).unwrap();
        assert_eq!(a.plus(b).value(), 10);
        let off = WordOffset::new(50).unwrap();
        assert_eq!(off.plus(a).value(), 54);
    }

    #[test]
    fn test_negative_word_values_rejected() {
        assert!(WordLength::new(-1).is_err());
        assert!(WordOffset::new(-50).is_err());
    }
}

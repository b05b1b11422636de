//! Byte/Char helpers
use memchr::memchr;

use super::bonus::CharClass;

/// A unit of comparison: `u8` when both strings are ASCII, `char` otherwise.
pub(super) trait Atom: PartialEq + Copy {
    #[inline(always)]
    fn eq(self, other: Self, respect_case: bool) -> bool
    where
        Self: PartialEq + Sized,
    {
        if respect_case {
            self == other
        } else {
            self.eq_ignore_case(other)
        }
    }

    /// ASCII-only folding. Non-ASCII atoms compare by equality.
    fn eq_ignore_case(self, other: Self) -> bool;

    fn class(self) -> CharClass;

    /// Return the index of the first occurrence of `self` in `haystack`,
    /// or `None` if not found.
    #[inline]
    fn find_first_in(self, haystack: &[Self], respect_case: bool) -> Option<usize> {
        haystack.iter().position(|&c| self.eq(c, respect_case))
    }
}

#[inline(always)]
fn ascii_class(b: u8) -> CharClass {
    match b {
        b'a'..=b'z' => CharClass::Lower,
        b'A'..=b'Z' => CharClass::Upper,
        b'0'..=b'9' => CharClass::Number,
        b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c' => CharClass::Whitespace,
        _ if super::constants::DELIMITERS.contains(&b) => CharClass::Delimiter,
        _ => CharClass::NonWord,
    }
}

impl Atom for u8 {
    #[inline(always)]
    fn eq_ignore_case(self, b: Self) -> bool {
        self.eq_ignore_ascii_case(&b)
    }

    #[inline(always)]
    fn class(self) -> CharClass {
        ascii_class(self)
    }

    /// Case-sensitive search uses SIMD-backed `memchr`; case-insensitive
    /// searches both case variants and keeps the earliest hit.
    #[inline]
    fn find_first_in(self, haystack: &[Self], respect_case: bool) -> Option<usize> {
        if respect_case {
            return memchr(self, haystack);
        }
        let lo = self.to_ascii_lowercase();
        let hi = self.to_ascii_uppercase();
        if lo == hi {
            return memchr(lo, haystack);
        }
        match (memchr(lo, haystack), memchr(hi, haystack)) {
            (None, x) | (x, None) => x,
            (Some(a), Some(b)) => Some(a.min(b)),
        }
    }
}

impl Atom for char {
    #[inline(always)]
    fn eq_ignore_case(self, b: Self) -> bool {
        self.eq_ignore_ascii_case(&b)
    }

    fn class(self) -> CharClass {
        if self.is_ascii() {
            return ascii_class(self as u8);
        }
        if self.is_whitespace() {
            CharClass::Whitespace
        } else if self.is_uppercase() {
            CharClass::Upper
        } else if self.is_alphabetic() {
            // Caseless scripts count as lowercase so they never open a camel hump.
            CharClass::Lower
        } else if self.is_numeric() {
            CharClass::Number
        } else {
            CharClass::NonWord
        }
    }
}

// ============================================================================
// Digits
// Character set utilities shared by the parser and the renderer
// ============================================================================

use super::radix::Radix;

/// Digit symbols in value order. Rendering always uses uppercase.
pub const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A single numeral digit with value 0..=15.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Digit(u8);

impl Digit {
    /// Decode a digit character. Letters are accepted in either case.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self(c as u8 - b'0')),
            'A'..='F' => Some(Self(c as u8 - b'A' + 10)),
            'a'..='f' => Some(Self(c as u8 - b'a' + 10)),
            _ => None,
        }
    }

    /// Digit for a numeric value, `None` if the value is 16 or more.
    #[inline]
    pub fn from_value(value: u32) -> Option<Self> {
        (value < 16).then_some(Self(value as u8))
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Uppercase symbol for this digit.
    #[inline]
    pub const fn to_char(self) -> char {
        DIGITS[self.0 as usize] as char
    }

    #[inline]
    pub fn is_valid_for(self, radix: Radix) -> bool {
        u32::from(self.0) < radix.value()
    }
}

/// Value of `c` if it is a digit of `radix`.
#[inline]
pub fn digit_value(c: char, radix: Radix) -> Option<u8> {
    Digit::from_char(c)
        .filter(|d| d.is_valid_for(radix))
        .map(Digit::value)
}

#[inline]
pub fn is_valid_digit(c: char, radix: Radix) -> bool {
    digit_value(c, radix).is_some()
}

/// First character of `segment` that is not a digit of `radix`.
pub fn first_invalid_digit(segment: &str, radix: Radix) -> Option<char> {
    segment.chars().find(|&c| !is_valid_digit(c, radix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_from_char() {
        assert_eq!(Digit::from_char('0').map(Digit::value), Some(0));
        assert_eq!(Digit::from_char('9').map(Digit::value), Some(9));
        assert_eq!(Digit::from_char('a').map(Digit::value), Some(10));
        assert_eq!(Digit::from_char('F').map(Digit::value), Some(15));
        assert_eq!(Digit::from_char('G'), None);
        assert_eq!(Digit::from_char('.'), None);
        assert_eq!(Digit::from_char('-'), None);
    }

    #[test]
    fn test_validity_per_radix() {
        assert!(is_valid_digit('1', Radix::BINARY));
        assert!(!is_valid_digit('2', Radix::BINARY));
        assert!(is_valid_digit('7', Radix::OCTAL));
        assert!(!is_valid_digit('8', Radix::OCTAL));
        assert!(!is_valid_digit('A', Radix::DECIMAL));
        assert!(is_valid_digit('f', Radix::HEXADECIMAL));
        assert_eq!(digit_value('c', Radix::HEXADECIMAL), Some(12));
        assert_eq!(digit_value('c', Radix::DECIMAL), None);
    }

    #[test]
    fn test_first_invalid_digit() {
        assert_eq!(first_invalid_digit("0101", Radix::BINARY), None);
        assert_eq!(first_invalid_digit("01201", Radix::BINARY), Some('2'));
        assert_eq!(first_invalid_digit("FFGZ", Radix::HEXADECIMAL), Some('G'));
        assert_eq!(first_invalid_digit("", Radix::DECIMAL), None);
    }

    quickcheck! {
        fn prop_digit_char_round_trip(value: u8) -> bool {
            match Digit::from_value(u32::from(value)) {
                Some(d) => Digit::from_char(d.to_char()) == Some(d),
                None => value >= 16,
            }
        }

        fn prop_case_insensitive(c: char) -> bool {
            Digit::from_char(c) == Digit::from_char(c.to_ascii_uppercase())
        }

        fn prop_charset_matches_validity(c: char, base: u8) -> bool {
            let radix = match Radix::new(u32::from(base % 15) + 2) {
                Ok(r) => r,
                Err(_) => return false,
            };
            let in_charset = c.is_ascii() && radix.charset().contains(&(c.to_ascii_uppercase() as u8));
            in_charset == is_valid_digit(c, radix)
        }
    }
}

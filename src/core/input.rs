//! Parsing of textual hash words and coefficient strips.
//!
//! ## Hash words
//! - `0x` hex, `0b` binary or decimal, with optional `_` separators
//! - A leading `-` reinterprets the signed value's bit pattern, so `-1` is
//!   `0xFFFF_FFFF_FFFF_FFFF`
//!
//! ## Strips
//! - A hex string behind a `0x` prefix: `"0x010203"`
//! - Otherwise a list of decimal bytes separated by commas and/or
//!   whitespace: `"1, 2, 3"`, `"1 2 3"` or a single `"200"`

use crate::error::ParseError;

/// Parse a 64-bit hash word.
pub fn parse_hash_word(input: &str) -> Result<u64, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let cleaned: String = trimmed.chars().filter(|&c| c != '_').collect();
    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let invalid = |reason: String| ParseError::InvalidHashWord {
        input: trimmed.to_string(),
        reason,
    };

    let magnitude = if let Some(hex) = strip_radix_prefix(body, 'x') {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = strip_radix_prefix(body, 'b') {
        u64::from_str_radix(bin, 2)
    } else {
        body.parse::<u64>()
    }
    .map_err(|e| invalid(e.to_string()))?;

    if !negative {
        return Ok(magnitude);
    }
    if magnitude > i64::MIN.unsigned_abs() {
        return Err(invalid("out of range for a signed 64-bit word".to_string()));
    }
    Ok(magnitude.wrapping_neg())
}

/// Parse a coefficient strip.
pub fn parse_strip(input: &str) -> Result<Vec<u8>, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    match strip_radix_prefix(trimmed, 'x') {
        Some(digits) => parse_hex(digits),
        None => parse_decimal_list(trimmed),
    }
}

/// Strip a `0x`/`0X` style prefix for the given radix letter
fn strip_radix_prefix(s: &str, letter: char) -> Option<&str> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some('0'), Some(c)) if c.eq_ignore_ascii_case(&letter) => Some(&s[2..]),
        _ => None,
    }
}

fn parse_decimal_list(text: &str) -> Result<Vec<u8>, ParseError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<u8>().map_err(|_| ParseError::InvalidStripByte {
                input: token.to_string(),
                position,
            })
        })
        .collect()
}

fn parse_hex(digits: &str) -> Result<Vec<u8>, ParseError> {
    if digits.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let chars: Vec<char> = digits.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(ParseError::OddHexLength { len: chars.len() });
    }

    chars
        .chunks(2)
        .enumerate()
        .map(|(position, pair)| match (pair[0].to_digit(16), pair[1].to_digit(16)) {
            (Some(hi), Some(lo)) => Ok((hi * 16 + lo) as u8),
            _ => Err(ParseError::InvalidStripByte {
                input: pair.iter().collect(),
                position,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_word_accepts_hex_binary_and_decimal() {
        assert_eq!(parse_hash_word("0xFF").unwrap(), 255);
        assert_eq!(parse_hash_word("0XaBcD").unwrap(), 0xABCD);
        assert_eq!(parse_hash_word("0b1010").unwrap(), 10);
        assert_eq!(parse_hash_word("12345").unwrap(), 12345);
        assert_eq!(parse_hash_word("  42 ").unwrap(), 42);
    }

    #[test]
    fn hash_word_ignores_underscores() {
        assert_eq!(
            parse_hash_word("0xAAAA_AAAA_AAAA_AAAA").unwrap(),
            0xAAAA_AAAA_AAAA_AAAA
        );
    }

    #[test]
    fn negative_hash_word_keeps_bit_pattern() {
        assert_eq!(parse_hash_word("-1").unwrap(), u64::MAX);
        assert_eq!(parse_hash_word("-2").unwrap(), -2i64 as u64);
        assert_eq!(
            parse_hash_word("-9223372036854775808").unwrap(),
            i64::MIN as u64
        );
    }

    #[test]
    fn negative_hash_word_out_of_range_is_rejected() {
        let err = parse_hash_word("-9223372036854775809").unwrap_err();
        assert!(matches!(err, ParseError::InvalidHashWord { .. }));
    }

    #[test]
    fn invalid_hash_word_is_rejected() {
        assert!(matches!(
            parse_hash_word("0xZZ"),
            Err(ParseError::InvalidHashWord { .. })
        ));
        assert!(matches!(
            parse_hash_word("18446744073709551616"),
            Err(ParseError::InvalidHashWord { .. })
        ));
        assert_eq!(parse_hash_word("   "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn strip_accepts_decimal_lists() {
        assert_eq!(parse_strip("1, 2, 3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_strip("1 2\t3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_strip("200,").unwrap(), vec![200]);
    }

    #[test]
    fn bare_token_is_a_decimal_byte() {
        assert_eq!(parse_strip("10").unwrap(), vec![10]);
        assert_eq!(parse_strip("200").unwrap(), vec![200]);
        assert_eq!(
            parse_strip("ff"),
            Err(ParseError::InvalidStripByte {
                input: "ff".to_string(),
                position: 0,
            })
        );
    }

    #[test]
    fn strip_accepts_hex() {
        assert_eq!(parse_strip("0x01ff80").unwrap(), vec![0x01, 0xFF, 0x80]);
        assert_eq!(parse_strip("0XdeadBEEF").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn strip_rejects_out_of_range_byte() {
        assert_eq!(
            parse_strip("1, 2, 300"),
            Err(ParseError::InvalidStripByte {
                input: "300".to_string(),
                position: 2,
            })
        );
    }

    #[test]
    fn strip_rejects_bad_hex() {
        assert_eq!(parse_strip("0xabc"), Err(ParseError::OddHexLength { len: 3 }));
        assert_eq!(
            parse_strip("0x00zz"),
            Err(ParseError::InvalidStripByte {
                input: "zz".to_string(),
                position: 1,
            })
        );
        assert_eq!(parse_strip("0x"), Err(ParseError::EmptyInput));
        assert_eq!(parse_strip(""), Err(ParseError::EmptyInput));
    }
}

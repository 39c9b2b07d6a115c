//! Integer spelling normalization
//!
//! Iteration counts may be written the way a Python `int()` literal is:
//! digit groups separated by single underscores (`1_000`) and decimal digits
//! from any Unicode script (`٣`). [`normalize`] rewrites such input to plain
//! ASCII so it can go through `str::parse`. Misplaced underscores are left in
//! place and make the parse fail.

/// Code points of the `0` digit of every Unicode decimal digit run (Nd, Unicode 14)
///
/// Each run is ten contiguous code points, `0` through `9`.
static DECIMAL_ZEROS: [u32; 66] = [
    0x30, 0x660, 0x6F0, 0x7C0, 0x966, 0x9E6, 0xA66, 0xAE6, 0xB66, 0xBE6, 0xC66, 0xCE6, 0xD66,
    0xDE6, 0xE50, 0xED0, 0xF20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90,
    0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0,
    0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0,
    0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x16A60, 0x16AC0,
    0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E950, 0x1FBF0,
];

/// Decimal value of `c` if it is a decimal digit in any script
pub fn decimal_value(c: char) -> Option<u8> {
    let cp = u32::from(c);
    let idx = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp);
    let zero = DECIMAL_ZEROS[idx.checked_sub(1)?];
    let offset = cp - zero;
    (offset < 10).then_some(offset as u8)
}

/// Trim whitespace, drop underscores that sit between two digits, and map
/// every decimal digit to ASCII
pub fn normalize(value: &str) -> String {
    let chars: Vec<char> = value.trim().chars().collect();
    let is_digit_at = |i: usize| chars.get(i).and_then(|&c| decimal_value(c)).is_some();

    let mut out = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' && i > 0 && is_digit_at(i - 1) && is_digit_at(i + 1) {
            continue;
        }
        match decimal_value(c) {
            Some(d) => out.push(char::from(b'0' + d)),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_value_ascii() {
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(decimal_value(c), Some(i as u8));
        }
        assert_eq!(decimal_value('a'), None);
        assert_eq!(decimal_value('/'), None);
        assert_eq!(decimal_value(':'), None);
    }

    #[test]
    fn test_decimal_value_other_scripts() {
        assert_eq!(decimal_value('٣'), Some(3)); // Arabic-Indic
        assert_eq!(decimal_value('७'), Some(7)); // Devanagari
        assert_eq!(decimal_value('９'), Some(9)); // fullwidth
        assert_eq!(decimal_value('\u{1D7CE}'), Some(0)); // mathematical bold
        assert_eq!(decimal_value('\u{1D7D7}'), Some(9));
        assert_eq!(decimal_value('\u{1D7D8}'), Some(0)); // next run
    }

    #[test]
    fn test_decimal_value_non_decimal_numerics() {
        assert_eq!(decimal_value('½'), None);
        assert_eq!(decimal_value('Ⅻ'), None);
        assert_eq!(decimal_value('²'), None);
        assert_eq!(decimal_value('\u{0}'), None);
    }

    #[test]
    fn test_normalize_underscores() {
        assert_eq!(normalize("1_000"), "1000");
        assert_eq!(normalize("1_0_0"), "100");
        assert_eq!(normalize("1__0"), "1__0");
        assert_eq!(normalize("_1"), "_1");
        assert_eq!(normalize("1_"), "1_");
        assert_eq!(normalize("+_1"), "+_1");
    }

    #[test]
    fn test_normalize_scripts_and_whitespace() {
        assert_eq!(normalize("٣"), "3");
        assert_eq!(normalize("-٣"), "-3");
        assert_eq!(normalize("1٣_٣"), "133");
        assert_eq!(normalize(" \t42\n"), "42");
    }
}

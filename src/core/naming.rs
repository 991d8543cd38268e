//! Filename convention `<name>_<ordinal>.<ext>`: splits an original file
//! name into the tale it belongs to and its position in that tale.

/// Why a record did not make it into a tale.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SkipReason {
    /// Not an object, or `id` / `originalName` missing, empty or not a string.
    MissingFields,
    /// No `.` in the name, or the name starts with one.
    NoExtension,
    /// No `_` before the extension, or the stem starts with one.
    NoOrdinalSeparator,
    /// Empty tale name, or an ordinal that is not a non-negative integer.
    InvalidOrdinal,
}

impl SkipReason {
    /// Token printed on stdout for this skip, if any.
    pub fn diagnostic(&self) -> Option<&'static str> {
        match self {
            SkipReason::NoExtension => Some("kore"),
            SkipReason::NoOrdinalSeparator => Some("sore"),
            SkipReason::MissingFields | SkipReason::InvalidOrdinal => None,
        }
    }
}

/// Tale name and ordinal derived from a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartName<'a> {
    pub name: &'a str,
    pub ordinal: u64,
}

/// Split `foo_bar_12.mp3` into `("foo_bar", 12)`.
pub fn derive_part_name(original_name: &str) -> Result<PartName<'_>, SkipReason> {
    let stem = match original_name.rfind('.') {
        Some(p) if p > 0 => &original_name[..p],
        _ => return Err(SkipReason::NoExtension),
    };
    let (name, suffix) = match stem.rfind('_') {
        Some(p) if p > 0 => (&stem[..p], &stem[p + 1..]),
        _ => return Err(SkipReason::NoOrdinalSeparator),
    };
    if name.is_empty() {
        return Err(SkipReason::InvalidOrdinal);
    }
    let ordinal = match parse_leading_int(suffix) {
        Some(v) if v >= 0 => u64::try_from(v).unwrap_or(u64::MAX),
        _ => return Err(SkipReason::InvalidOrdinal),
    };
    Ok(PartName { name, ordinal })
}

/// Parse the longest integer prefix of `s`.
///
/// Leading whitespace is ignored, a single `+` or `-` is accepted and a
/// `0x`/`0X` prefix selects base 16. Anything after the digit run is
/// ignored. Returns `None` when no digit follows the prefix. Magnitudes
/// that do not fit saturate.
pub fn parse_leading_int(s: &str) -> Option<i128> {
    let s = s.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i128 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        seen = true;
        value = value
            .saturating_mul(radix as i128)
            .saturating_add(d as i128);
    }
    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

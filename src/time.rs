//! The RFC 3339 subset of datetimes accepted in TOML v0.4 documents.

use std::fmt;

/// A TOML datetime with an explicit UTC offset.
///
/// All fields are plain integers; no timezone database is consulted. The
/// parser stores an offset of `0`/`0` for a `Z` suffix, and the canonical
/// [`Display`](fmt::Display) form prints `Z` whenever the offset is zero.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Fractional seconds accumulated as an integer; 0 means absent.
    pub microsecond: u32,
    pub hour_offset: i8,
    pub minute_offset: i8,
}

fn digits(bytes: &[u8], at: &mut usize, width: usize) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..width {
        let b = *bytes.get(*at)?;
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(b - b'0');
        *at += 1;
    }
    Some(value)
}

fn eat(bytes: &[u8], at: &mut usize, expected: u8) -> Option<()> {
    if *bytes.get(*at)? == expected {
        *at += 1;
        Some(())
    } else {
        None
    }
}

impl DateTime {
    /// Parses the fixed-width form `YYYY-MM-DDTHH:MM:SS`, an optional `.`
    /// with one or more fractional digits, and a mandatory `Z` or `+HH:MM` /
    /// `-HH:MM` offset. The whole input must be consumed.
    pub fn from_rfc3339(input: &str) -> Option<DateTime> {
        let bytes = input.as_bytes();
        let mut at = 0usize;

        let year = digits(bytes, &mut at, 4)? as u16;
        eat(bytes, &mut at, b'-')?;
        let month = digits(bytes, &mut at, 2)? as u8;
        eat(bytes, &mut at, b'-')?;
        let day = digits(bytes, &mut at, 2)? as u8;
        eat(bytes, &mut at, b'T')?;
        let hour = digits(bytes, &mut at, 2)? as u8;
        eat(bytes, &mut at, b':')?;
        let minute = digits(bytes, &mut at, 2)? as u8;
        eat(bytes, &mut at, b':')?;
        let second = digits(bytes, &mut at, 2)? as u8;

        let mut microsecond = 0u32;
        if bytes.get(at) == Some(&b'.') {
            at += 1;
            let mut any = false;
            while let Some(&b) = bytes.get(at) {
                if !b.is_ascii_digit() {
                    break;
                }
                microsecond = microsecond
                    .checked_mul(10)?
                    .checked_add(u32::from(b - b'0'))?;
                any = true;
                at += 1;
            }
            if !any {
                return None;
            }
        }

        let (mut hour_offset, mut minute_offset) = (0i8, 0i8);
        match *bytes.get(at)? {
            b'Z' => at += 1,
            sign @ (b'+' | b'-') => {
                let negative = sign == b'-';
                at += 1;
                let hours = digits(bytes, &mut at, 2)?;
                eat(bytes, &mut at, b':')?;
                let minutes = digits(bytes, &mut at, 2)?;
                if hours > i8::MAX as u32 || minutes > i8::MAX as u32 {
                    return None;
                }
                hour_offset = if negative { -(hours as i8) } else { hours as i8 };
                minute_offset = if negative {
                    -(minutes as i8)
                } else {
                    minutes as i8
                };
            }
            _ => return None,
        }

        if at != bytes.len() {
            return None;
        }
        Some(DateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
            hour_offset,
            minute_offset,
        })
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.microsecond > 0 {
            write!(f, ".{:06}", self.microsecond)?;
        }
        if self.hour_offset != 0 || self.minute_offset != 0 {
            let sign = if self.hour_offset < 0 || self.minute_offset < 0 {
                '-'
            } else {
                '+'
            };
            write!(
                f,
                "{sign}{:02}:{:02}",
                self.hour_offset.unsigned_abs(),
                self.minute_offset.unsigned_abs()
            )?;
        } else {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

impl fmt::Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
#[path = "./time_tests.rs"]
mod tests;

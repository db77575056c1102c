//! printf-style format interpreter
//!
//! Recognized conversions:
//!
//! | Specifier   | Argument        | Output                                 |
//! |-------------|-----------------|----------------------------------------|
//! | `%d`, `%i`  | signed          | decimal, leading `-` when negative     |
//! | `%u`        | unsigned        | decimal                                |
//! | `%x`, `%X`  | unsigned        | hexadecimal, no prefix, no padding     |
//! | `%s`        | string          | the string, or `(null)` when absent    |
//! | `%c`        | character       | exactly one byte                       |
//! | `%%`        | none            | `%`                                    |
//! | other `%q`  | none            | `%q` verbatim                          |
//!
//! There are no width, precision or flag modifiers. Output never exceeds the
//! destination; once it is full, the remaining directives are skipped.

use super::buffer::SliceWriter;
use super::numeric;

/// Rendered in place of an absent string argument.
pub const NULL_STR: &[u8] = b"(null)";

/// One argument to a format string.
///
/// Built at the call site, normally through `From`:
///
/// ```
/// use micro_logger::Arg;
///
/// let args = [Arg::from("world"), Arg::from(123), Arg::from('!')];
/// assert_eq!(args[1], Arg::Signed(123));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    Signed(i64),
    Unsigned(u64),
    Str(Option<&'a str>),
    Char(u8),
}

impl<'a> Arg<'a> {
    fn signed(self) -> Option<i64> {
        match self {
            Arg::Signed(v) => Some(v),
            Arg::Unsigned(v) => Some(v as i64),
            Arg::Char(c) => Some(i64::from(c)),
            Arg::Str(_) => None,
        }
    }

    fn unsigned(self) -> Option<u64> {
        match self {
            Arg::Unsigned(v) => Some(v),
            // two's complement reinterpretation
            Arg::Signed(v) => Some(v as u64),
            Arg::Char(c) => Some(u64::from(c)),
            Arg::Str(_) => None,
        }
    }

    fn byte(self) -> Option<u8> {
        match self {
            Arg::Char(c) => Some(c),
            Arg::Signed(v) => Some(v as u8),
            Arg::Unsigned(v) => Some(v as u8),
            Arg::Str(_) => None,
        }
    }

    fn str(self) -> Option<&'a str> {
        match self {
            Arg::Str(s) => s,
            _ => None,
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Arg<'_> {
                #[inline]
                fn from(value: $t) -> Self {
                    Arg::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_int!(Signed, i64: i8, i16, i32, i64, isize);
impl_from_int!(Unsigned, u64: u8, u16, u32, u64, usize);

impl From<char> for Arg<'_> {
    /// Characters outside `0..=0xFF` become `?`.
    fn from(value: char) -> Self {
        Arg::Char(u8::try_from(value).unwrap_or(b'?'))
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(Some(value))
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Arg::Str(value)
    }
}

/// One parsed unit of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'f> {
    /// Bytes copied verbatim.
    Literal(&'f [u8]),
    Signed,
    Unsigned,
    LowerHex,
    UpperHex,
    Str,
    Char,
    Percent,
    /// Unrecognized specifier, echoed as `%` followed by the byte.
    Unknown(u8),
}

impl Directive<'_> {
    fn from_specifier(spec: u8) -> Self {
        match spec {
            b'd' | b'i' => Directive::Signed,
            b'u' => Directive::Unsigned,
            b'x' => Directive::LowerHex,
            b'X' => Directive::UpperHex,
            b's' => Directive::Str,
            b'c' => Directive::Char,
            b'%' => Directive::Percent,
            other => Directive::Unknown(other),
        }
    }
}

/// Iterator splitting a format string into [`Directive`]s.
///
/// A `%` at the very end of the string has no specifier and is yielded as a
/// one-byte literal.
#[derive(Debug, Clone)]
pub struct Directives<'f> {
    rest: &'f [u8],
}

impl<'f> Directives<'f> {
    pub fn new(format: &'f str) -> Self {
        Self {
            rest: format.as_bytes(),
        }
    }
}

impl<'f> Iterator for Directives<'f> {
    type Item = Directive<'f>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest: &'f [u8] = self.rest;
        match rest {
            [] => None,
            [b'%', spec, rest @ ..] => {
                self.rest = rest;
                Some(Directive::from_specifier(*spec))
            }
            [b'%'] => {
                self.rest = &[];
                Some(Directive::Literal(rest))
            }
            bytes => {
                let end = bytes.iter().position(|&b| b == b'%').unwrap_or(bytes.len());
                let (literal, rest) = bytes.split_at(end);
                self.rest = rest;
                Some(Directive::Literal(literal))
            }
        }
    }
}

/// Interpret `format` with `args` into `buf`, returning the bytes written.
///
/// An absent format string writes nothing. Output is truncated to
/// `buf.len()`; this never fails and never allocates.
pub fn format(buf: &mut [u8], format: Option<&str>, args: &[Arg<'_>]) -> usize {
    let Some(format) = format else {
        return 0;
    };
    let mut out = SliceWriter::new(buf);
    format_into(&mut out, format, args);
    out.len()
}

/// Same as [`format`], appending to an existing writer.
pub fn format_into(out: &mut SliceWriter<'_>, format: &str, args: &[Arg<'_>]) {
    let mut args = args.iter().copied();

    for directive in Directives::new(format) {
        if out.is_full() {
            break;
        }
        match directive {
            Directive::Literal(bytes) => {
                out.push(bytes);
            }
            Directive::Signed => {
                if let Some(v) = args.next().and_then(Arg::signed) {
                    out.push_with(|tail| numeric::to_signed_decimal(v, tail));
                }
            }
            Directive::Unsigned => {
                if let Some(v) = args.next().and_then(Arg::unsigned) {
                    out.push_with(|tail| numeric::to_decimal(v, tail));
                }
            }
            Directive::LowerHex | Directive::UpperHex => {
                let uppercase = directive == Directive::UpperHex;
                if let Some(v) = args.next().and_then(Arg::unsigned) {
                    out.push_with(|tail| numeric::to_hex(v, tail, uppercase));
                }
            }
            Directive::Str => {
                let s = args.next().and_then(Arg::str);
                out.push(s.map_or(NULL_STR, str::as_bytes));
            }
            Directive::Char => {
                if let Some(c) = args.next().and_then(Arg::byte) {
                    out.push_byte(c);
                }
            }
            Directive::Percent => {
                out.push_byte(b'%');
            }
            Directive::Unknown(spec) => {
                out.push(&[b'%', spec]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<const N: usize>(fmt: &str, args: &[Arg<'_>]) -> ([u8; N], usize) {
        let mut buf = [0u8; N];
        let n = format(&mut buf, Some(fmt), args);
        (buf, n)
    }

    fn check(fmt: &str, args: &[Arg<'_>], expected: &str) {
        let (buf, n) = render::<128>(fmt, args);
        assert_eq!(
            core::str::from_utf8(&buf[..n]).unwrap(),
            expected,
            "format {:?}",
            fmt
        );
    }

    #[test]
    fn test_directives_split() {
        let expected = [
            Directive::Literal(b"a"),
            Directive::Signed,
            Directive::Literal(b"b"),
            Directive::Percent,
            Directive::Literal(b"c"),
            Directive::Unknown(b'q'),
            Directive::Literal(b"%"),
        ];
        assert!(Directives::new("a%db%%c%q%").eq(expected));
    }

    #[test]
    fn test_conversions() {
        check("Number: %d", &[Arg::from(-42)], "Number: -42");
        check("%i", &[Arg::from(7)], "7");
        check("Unsigned: %u", &[Arg::from(12345u32)], "Unsigned: 12345");
        check("Hex: %x", &[Arg::from(0xDEAD_BEEFu32)], "Hex: deadbeef");
        check("Hex: %X", &[Arg::from(0xDEAD_BEEFu32)], "Hex: DEADBEEF");
        check("String: %s", &[Arg::from("hello")], "String: hello");
        check("Char: %c", &[Arg::from('X')], "Char: X");
        check("Percent: %%", &[], "Percent: %");
        check("Mix: %d %s %x", &[42.into(), "test".into(), 0xFFu8.into()], "Mix: 42 test ff");
    }

    #[test]
    fn test_zero_renders_digit() {
        check("%d %u %x %X", &[0.into(), 0u8.into(), 0u8.into(), 0u8.into()], "0 0 0 0");
    }

    #[test]
    fn test_signed_minimum() {
        check("%d", &[Arg::from(i64::MIN)], "-9223372036854775808");
        check("%d", &[Arg::from(i32::MIN)], "-2147483648");
    }

    #[test]
    fn test_fail_soft_cases() {
        check("%q", &[], "%q");
        check("%s", &[Arg::Str(None)], "(null)");
        check("%s", &[], "(null)");
        check("%s", &[Arg::from(5)], "(null)");
        check("%d|%c|%x", &[], "||");
        check("100%", &[], "100%");
    }

    #[test]
    fn test_argument_coercion() {
        check("%x", &[Arg::from(-1i64)], "ffffffffffffffff");
        check("%d", &[Arg::from(200u8)], "200");
        check("%c", &[Arg::from(0x41u32)], "A");
        check("%u", &[Arg::from('a')], "97");
    }

    #[test]
    fn test_wide_char_becomes_question_mark() {
        assert_eq!(Arg::from('\u{e9}'), Arg::Char(0xE9));
        assert_eq!(Arg::from('\u{20ac}'), Arg::Char(b'?'));
        check("%c%c", &['\u{20ac}'.into(), '\u{1f600}'.into()], "??");
    }

    #[test]
    fn test_extra_args_ignored() {
        check("only %d", &[1.into(), 2.into()], "only 1");
    }

    #[test]
    fn test_absent_format_writes_nothing() {
        let mut buf = [0xAAu8; 8];
        assert_eq!(format(&mut buf, None, &[Arg::from(1)]), 0);
        assert_eq!(buf, [0xAA; 8]);
    }

    #[test]
    fn test_truncation() {
        let (buf, n) = render::<5>("abc%d", &[Arg::from(12345)]);
        assert_eq!(n, 5);
        assert_eq!(&buf, b"abc12");

        let (buf, n) = render::<4>("%s%%", &[Arg::from("xyz")]);
        assert_eq!(n, 4);
        assert_eq!(&buf, b"xyz%");

        let (buf, n) = render::<3>("ab%q", &[]);
        assert_eq!(n, 3);
        assert_eq!(&buf, b"ab%");
    }

    #[test]
    fn test_output_exactly_fills_destination() {
        let (buf, n) = render::<5>("abc%d", &[Arg::from(12)]);
        assert_eq!(n, 5);
        assert_eq!(&buf, b"abc12");

        let (buf, n) = render::<5>("abc%d%s", &[Arg::from(12), Arg::from("more")]);
        assert_eq!(n, 5);
        assert_eq!(&buf, b"abc12");
    }

    #[test]
    fn test_empty_destination() {
        let mut buf: [u8; 0] = [];
        assert_eq!(format(&mut buf, Some("hello %d"), &[Arg::from(1)]), 0);
    }
}

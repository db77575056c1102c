//! Integer to ASCII conversion into bounded buffers
//!
//! Digits are generated least-significant first into a scratch array sized for
//! the widest supported integer, then copied most-significant first into the
//! destination. When the destination is too short, the leading digits that
//! fit are written and the rest are dropped.

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Digits needed for `u64::MAX` in decimal.
pub const MAX_DECIMAL_DIGITS: usize = 20;

/// Digits needed for `u64::MAX` in hexadecimal.
pub const MAX_HEX_DIGITS: usize = 16;

/// Write `value` in decimal, returning the number of bytes written.
#[inline]
pub fn to_decimal(value: u64, buf: &mut [u8]) -> usize {
    to_radix(value, 10, LOWER_DIGITS, buf)
}

/// Write `value` in hexadecimal without prefix or padding.
#[inline]
pub fn to_hex(value: u64, buf: &mut [u8], uppercase: bool) -> usize {
    let digits = if uppercase { UPPER_DIGITS } else { LOWER_DIGITS };
    to_radix(value, 16, digits, buf)
}

/// Write `value` in decimal with a leading `-` when negative.
///
/// The magnitude is taken through `unsigned_abs`, so `i64::MIN` converts
/// without overflow.
pub fn to_signed_decimal(value: i64, buf: &mut [u8]) -> usize {
    if value >= 0 {
        return to_decimal(value.unsigned_abs(), buf);
    }
    match buf.split_first_mut() {
        Some((sign, rest)) => {
            *sign = b'-';
            1 + to_decimal(value.unsigned_abs(), rest)
        }
        None => 0,
    }
}

fn to_radix(mut value: u64, radix: u64, digits: &[u8; 16], buf: &mut [u8]) -> usize {
    let mut scratch = [0u8; MAX_DECIMAL_DIGITS];
    let mut count = 0;

    // do-while: zero still produces one digit
    loop {
        scratch[count] = digits[(value % radix) as usize];
        count += 1;
        value /= radix;
        if value == 0 {
            break;
        }
    }

    let written = count.min(buf.len());
    for (dst, src) in buf[..written].iter_mut().zip(scratch[..count].iter().rev()) {
        *dst = *src;
    }
    written
}

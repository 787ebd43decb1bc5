/// Extracts a leading base-10 integer from `s`, in the manner of C's
/// `atoi`: leading ASCII whitespace is skipped, a single `+` or `-` sign is
/// accepted, and digits are consumed until the first non-digit.  If no
/// digits are found the result is `0`.
///
/// Values outside the `i32` range saturate at `i32::MIN`/`i32::MAX`.
pub fn leading_int(s: &str) -> i32 {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let mut n: i32 = 0;
    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        let digit = i32::from(byte - b'0');
        // Accumulate with the final sign so that i32::MIN round-trips
        n = if negative {
            n.saturating_mul(10).saturating_sub(digit)
        } else {
            n.saturating_mul(10).saturating_add(digit)
        };
    }
    n
}

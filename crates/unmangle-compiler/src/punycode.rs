//! RFC 3492 Punycode decoding.
//!
//! Invoked only when an identifier begins with the literal character `X`.
//! Decode failure fails the enclosing identifier production.

use crate::error::{ParseError, ParseResult};

const BASE: u32 = 36;
const TMIN: u32 = 1;
const TMAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 128;
const DELIMITER: u8 = b'-';

fn decode_digit(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some(26 + (byte - b'0') as u32),
        b'A'..=b'Z' => Some((byte - b'A') as u32),
        b'a'..=b'z' => Some((byte - b'a') as u32),
        _ => None,
    }
}

fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta /= if first_time { DAMP } else { 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - TMIN) * TMAX) / 2 {
        delta /= BASE - TMIN;
        k += BASE;
    }
    k + (((BASE - TMIN + 1) * delta) / (delta + SKEW))
}

/// Decodes a Punycode-encoded label into the Unicode text it represents.
pub fn decode(input: &[u8]) -> ParseResult<String> {
    let mut code_points: Vec<u32> = Vec::new();

    let (basic, extended) = match input.iter().rposition(|&b| b == DELIMITER) {
        Some(pos) => (&input[..pos], &input[pos + 1..]),
        None => (&b""[..], input),
    };

    if !basic.is_empty() {
        if !basic.is_ascii() {
            return Err(ParseError::BadPunycode);
        }
        for &b in basic {
            code_points.push(b as u32);
        }
    }

    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut pos = 0usize;

    while pos < extended.len() {
        let old_i = i;
        let mut w = 1u32;
        let mut k = BASE;
        loop {
            if pos >= extended.len() {
                return Err(ParseError::BadPunycode);
            }
            let digit = decode_digit(extended[pos]).ok_or(ParseError::BadPunycode)?;
            pos += 1;
            i = i
                .checked_add(digit.checked_mul(w).ok_or(ParseError::BadPunycode)?)
                .ok_or(ParseError::BadPunycode)?;
            let t = if k <= bias {
                TMIN
            } else if k >= bias + TMAX {
                TMAX
            } else {
                k - bias
            };
            if digit < t {
                break;
            }
            w = w.checked_mul(BASE - t).ok_or(ParseError::BadPunycode)?;
            k += BASE;
        }
        let num_points = (code_points.len() + 1) as u32;
        bias = adapt(i - old_i, num_points, old_i == 0);
        n = n.checked_add(i / num_points).ok_or(ParseError::BadPunycode)?;
        i %= num_points;
        code_points.insert(i as usize, n);
        i += 1;
    }

    code_points
        .into_iter()
        .map(|cp| char::from_u32(cp).ok_or(ParseError::BadPunycode))
        .collect()
}

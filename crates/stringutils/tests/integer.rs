//! Integration tests for strict integer parsing.

use stringutils::{IntegerError, to_integer};

/// Adds one to the magnitude of a decimal string, keeping any sign.
fn bump_magnitude(number: &str) -> String {
    let (sign, digits) = match number.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", number),
    };
    let mut digits: Vec<u8> = digits.bytes().collect();
    let mut i = digits.len();
    loop {
        if i == 0 {
            digits.insert(0, b'1');
            break;
        }
        i -= 1;
        if digits[i] == b'9' {
            digits[i] = b'0';
        } else {
            digits[i] += 1;
            break;
        }
    }
    format!("{sign}{}", String::from_utf8(digits).unwrap())
}

// =============================================================================
// Accepted numbers
// =============================================================================

#[test]
fn test_zero() {
    assert_eq!(to_integer("0"), Ok(0));
    assert_eq!(to_integer("-0"), Ok(0));
}

#[test]
fn test_small_numbers() {
    assert_eq!(to_integer("42"), Ok(42));
    assert_eq!(to_integer("-42"), Ok(-42));
    assert_eq!(to_integer("7"), Ok(7));
    assert_eq!(to_integer("1000000"), Ok(1_000_000));
}

#[test]
fn test_extremes() {
    assert_eq!(to_integer(&i64::MAX.to_string()), Ok(i64::MAX));
    assert_eq!(to_integer(&i64::MIN.to_string()), Ok(i64::MIN));
}

#[test]
fn test_round_trips_sampled_values() {
    let mut n: i64 = 1;
    while let Some(next) = n.checked_mul(7) {
        for value in [n, -n, n - 1, 1 - n] {
            assert_eq!(to_integer(&value.to_string()), Ok(value), "value {value}");
        }
        n = next;
    }
}

// =============================================================================
// Overflow
// =============================================================================

#[test]
fn test_max_plus_one_overflows() {
    let text = bump_magnitude(&i64::MAX.to_string());
    assert_eq!(text, "9223372036854775808");
    assert_eq!(to_integer(&text), Err(IntegerError::Overflow { index: 18 }));
}

#[test]
fn test_min_minus_one_overflows() {
    let text = bump_magnitude(&i64::MIN.to_string());
    assert_eq!(text, "-9223372036854775809");
    assert_eq!(to_integer(&text), Err(IntegerError::Overflow { index: 19 }));
}

#[test]
fn test_overflow_reported_at_first_offending_digit() {
    let err = to_integer("100000000000000000000000").unwrap_err();
    assert_eq!(err, IntegerError::Overflow { index: 19 });
    assert_eq!(err.index(), 19);
}

// =============================================================================
// Rejected text
// =============================================================================

#[test]
fn test_empty_and_bare_sign() {
    assert_eq!(to_integer(""), Err(IntegerError::NotANumber { index: 0 }));
    assert_eq!(to_integer("-"), Err(IntegerError::NotANumber { index: 1 }));
}

#[test]
fn test_leading_zeros_rejected() {
    assert_eq!(to_integer("00"), Err(IntegerError::NotANumber { index: 1 }));
    assert_eq!(to_integer("-012"), Err(IntegerError::NotANumber { index: 2 }));
}

#[test]
fn test_trailing_garbage_rejected() {
    assert_eq!(to_integer("12a"), Err(IntegerError::NotANumber { index: 2 }));
    assert_eq!(to_integer("1 "), Err(IntegerError::NotANumber { index: 1 }));
}

#[test]
fn test_plus_sign_and_whitespace_rejected() {
    assert_eq!(to_integer("+5"), Err(IntegerError::NotANumber { index: 0 }));
    assert_eq!(to_integer(" 5"), Err(IntegerError::NotANumber { index: 0 }));
    assert_eq!(to_integer("--5"), Err(IntegerError::NotANumber { index: 1 }));
}

#[test]
fn test_separators_rejected() {
    assert_eq!(to_integer("1,000"), Err(IntegerError::NotANumber { index: 1 }));
    assert_eq!(to_integer("1_000"), Err(IntegerError::NotANumber { index: 1 }));
}

#[test]
fn test_non_ascii_digits_rejected() {
    assert_eq!(to_integer("١٢"), Err(IntegerError::NotANumber { index: 0 }));
    assert_eq!(to_integer("1٢"), Err(IntegerError::NotANumber { index: 1 }));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        IntegerError::NotANumber { index: 3 }.to_string(),
        "not a number (at byte 3)"
    );
    assert_eq!(
        IntegerError::Overflow { index: 19 }.to_string(),
        "integer overflow (at byte 19)"
    );
}

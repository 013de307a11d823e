#![cfg(test)]

use super::*;

#[test]
fn test_base_cases() {
    assert_eq!(
        factorial(0), 1,
        "Zero factors should multiply to the empty product."
    );
    assert_eq!(factorial(1), 1);
}

#[test]
fn test_small_values() {
    assert_eq!(factorial(5), 120);
    assert_eq!(factorial(10), 3_628_800);
    assert_eq!(factorial(12), 479_001_600);
}

#[test]
fn test_negative_input() {
    assert_eq!(
        factorial(-3), 1,
        "Negative input should be treated as an empty product, not an error."
    );
    assert_eq!(
        factorial(i32::MIN), 1,
        "The empty-product rule should hold across the whole negative range."
    );
}

#[test]
fn test_overflow_wraps() {
    assert_eq!(
        factorial(13),
        479_001_600_i32.wrapping_mul(13),
        "Factorials past 12! should wrap rather than panic."
    );
}

#[test]
fn test_checked_boundary() {
    assert_eq!(checked_factorial(12), Some(479_001_600));
    assert_eq!(
        checked_factorial(13), None,
        "13! exceeds i32::MAX and should be reported as overflow."
    );
    assert_eq!(
        checked_factorial(-3), Some(1),
        "The empty-product rule shouldn't change in the checked variant."
    );
}

#[test]
fn test_checked_matches_unchecked() {
    for n in -2..=12 {
        assert_eq!(
            checked_factorial(n),
            Some(factorial(n)),
            "Checked and wrapping factorials should agree whenever no overflow occurs."
        );
    }
}

#[test]
fn test_idempotence() {
    for _ in 0..3 {
        assert_eq!(
            factorial(5), 120,
            "Repeated calls with the same input should always return the same result."
        );
    }
}

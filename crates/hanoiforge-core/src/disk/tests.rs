//! Tests for disk count validation.

use super::*;
use crate::error::HanoiError;

#[test]
fn test_parse_accepts_digits() {
    assert_eq!(DiskCount::parse("1").unwrap().get(), 1);
    assert_eq!(DiskCount::parse("20").unwrap().get(), 20);
    assert_eq!(DiskCount::parse("007").unwrap().get(), 7);
}

#[test]
fn test_parse_strips_all_whitespace() {
    assert_eq!(DiskCount::parse("  4\n").unwrap().get(), 4);
    assert_eq!(DiskCount::parse("1 2").unwrap().get(), 12);
    assert_eq!(DiskCount::parse("\t1\t5 ").unwrap().get(), 15);
}

#[test]
fn test_parse_rejects_non_digits() {
    for token in ["abc", "", "   ", "-3", "+3", "3.0", "1e3", "٣"] {
        assert_eq!(
            DiskCount::parse(token),
            Err(InputError::InvalidFormat),
            "token {token:?}"
        );
    }
}

#[test]
fn test_parse_zero() {
    assert_eq!(DiskCount::parse("0"), Err(InputError::ZeroDisks));
    assert_eq!(DiskCount::parse("000"), Err(InputError::ZeroDisks));
}

#[test]
fn test_parse_too_many() {
    assert_eq!(
        DiskCount::parse("21"),
        Err(InputError::TooManyDisks { max: 20 })
    );
    assert_eq!(
        DiskCount::parse("123456789012345678901234567890"),
        Err(InputError::TooManyDisks { max: 20 })
    );
}

#[test]
fn test_bounded_tightens_and_clamps() {
    assert_eq!(
        DiskCount::parse_bounded("6", 5),
        Err(InputError::TooManyDisks { max: 5 })
    );
    assert_eq!(DiskCount::parse_bounded("5", 5).unwrap().get(), 5);
    // A bound above MAX_DISKS never loosens validation.
    assert_eq!(
        DiskCount::parse_bounded("21", 64),
        Err(InputError::TooManyDisks { max: 20 })
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        InputError::InvalidFormat.to_string(),
        "Input is not a positive integer."
    );
    assert_eq!(InputError::ZeroDisks.to_string(), "No disks present in tower.");
    assert_eq!(
        InputError::TooManyDisks { max: 20 }.to_string(),
        "N>20, too many disks."
    );
}

#[test]
fn test_total_moves() {
    assert_eq!(DiskCount::new(1).unwrap().total_moves(), 1);
    assert_eq!(DiskCount::new(3).unwrap().total_moves(), 7);
    assert_eq!(DiskCount::new(20).unwrap().total_moves(), 1_048_575);
}

#[test]
fn test_parity() {
    assert!(!DiskCount::new(1).unwrap().is_even());
    assert!(DiskCount::new(4).unwrap().is_even());
}

#[test]
fn test_disks_bottom_up() {
    let disks: Vec<u8> = DiskCount::new(4)
        .unwrap()
        .disks_bottom_up()
        .map(Disk::size)
        .collect();
    assert_eq!(disks, vec![4, 3, 2, 1]);
}

#[test]
fn test_input_error_kind() {
    let err: HanoiError = DiskCount::parse("0").unwrap_err().into();
    assert_eq!(err.as_input_error(), Some(InputError::ZeroDisks));
    assert_eq!(err.to_string(), "No disks present in tower.");

    let err = HanoiError::UnexpectedFailure("boom".to_string());
    assert_eq!(err.as_input_error(), None);
}

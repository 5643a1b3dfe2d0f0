use crate::utils::{
    UtilsError, parse_hand, parse_numbers, to_display_symbols, validate_operand_count,
};

#[test]
fn test_parse_numbers_comma_separated() {
    let result = parse_numbers("4, 6, 2, 8");
    assert!(result.is_ok());
    if let Ok(numbers) = result {
        assert_eq!(numbers, vec![4.0, 6.0, 2.0, 8.0]);
    }
}

#[test]
fn test_parse_numbers_whitespace_separated() {
    let result = parse_numbers("  1 13\t7   5 ");
    assert!(result.is_ok());
    if let Ok(numbers) = result {
        assert_eq!(numbers, vec![1.0, 13.0, 7.0, 5.0]);
    }
}

#[test]
fn test_parse_numbers_mixed_separators() {
    let result = parse_numbers("3,,3 , 8 8");
    assert!(result.is_ok());
    if let Ok(numbers) = result {
        assert_eq!(numbers, vec![3.0, 3.0, 8.0, 8.0]);
    }
}

#[test]
fn test_parse_numbers_empty() {
    assert_eq!(parse_numbers(""), Err(UtilsError::EmptyInput));
    assert_eq!(parse_numbers(" , ,"), Err(UtilsError::EmptyInput));
}

#[test]
fn test_parse_numbers_invalid_token() {
    assert_eq!(
        parse_numbers("1 2 x 4"),
        Err(UtilsError::InvalidNumber("x".to_string()))
    );
    assert_eq!(
        parse_numbers("1 2.5 3 4"),
        Err(UtilsError::InvalidNumber("2.5".to_string()))
    );
}

#[test]
fn test_validate_operand_count() {
    assert!(validate_operand_count(&[1.0, 2.0, 3.0, 4.0], 4).is_ok());
    assert_eq!(
        validate_operand_count(&[1.0, 2.0], 4),
        Err(UtilsError::TooFewNumbers {
            expected: 4,
            found: 2
        })
    );
    assert_eq!(
        validate_operand_count(&[1.0, 2.0, 3.0, 4.0, 5.0], 4),
        Err(UtilsError::TooManyNumbers {
            expected: 4,
            found: 5
        })
    );
}

#[test]
fn test_to_display_symbols() {
    assert_eq!(to_display_symbols("8 / (3 - 8 / 3)"), "8 ÷ (3 - 8 ÷ 3)");
    assert_eq!(to_display_symbols("2 * 3 * 4 + 0"), "2 × 3 × 4 + 0");
}

#[test]
fn test_parse_hand() {
    let result = parse_hand("4,6,2,8", 4);
    assert!(result.is_ok());
    if let Ok(numbers) = result {
        assert_eq!(numbers.len(), 4);
    }

    assert_eq!(
        parse_hand("4 6 2", 4),
        Err(UtilsError::TooFewNumbers {
            expected: 4,
            found: 3
        })
    );
    assert_eq!(parse_hand("", 4), Err(UtilsError::EmptyInput));
}

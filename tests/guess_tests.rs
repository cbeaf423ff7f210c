use battleship_round::{validate_guesses, Coordinate, GuessSet, RoundError};

#[test]
fn test_valid_guesses_keep_order() {
    let set = GuessSet::parse(&["7:0", "3:3", "9:9"]).unwrap();
    let expected: Vec<_> = [(7, 0), (3, 3), (9, 9)]
        .into_iter()
        .map(|(r, c)| Coordinate::new(r, c).unwrap())
        .collect();
    assert_eq!(set.guesses(), expected.as_slice());
    assert_eq!(set.len(), 3);
    assert!(set.contains(Coordinate::new(3, 3).unwrap()));
    assert!(!set.contains(Coordinate::new(3, 4).unwrap()));
}

#[test]
fn test_empty_guesses_are_valid() {
    let none: [&str; 0] = [];
    assert!(validate_guesses(&none).is_ok());
    assert!(GuessSet::parse(&none).unwrap().is_empty());
}

#[test]
fn test_duplicate_guess() {
    assert_eq!(
        validate_guesses(&["2:2", "2:2"]).unwrap_err(),
        RoundError::DuplicateGuess {
            input: "2:2".into()
        }
    );
}

#[test]
fn test_duplicate_reported_before_later_format_error() {
    // "1:1" has a later twin, so it fails before "x" is ever parsed.
    assert_eq!(
        validate_guesses(&["1:1", "x", "1:1"]).unwrap_err(),
        RoundError::DuplicateGuess {
            input: "1:1".into()
        }
    );
}

#[test]
fn test_duplicates_are_textual() {
    // Same cell spelled differently is not a duplicate; the set collapses it.
    let set = GuessSet::parse(&["02:2", "2:2"]).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.board().count_ones(), 1);
}

#[test]
fn test_malformed_guess() {
    for input in ["5", "1:2:3", ""] {
        assert_eq!(
            validate_guesses(&[input]).unwrap_err(),
            RoundError::MalformedCoordinate {
                input: input.into()
            }
        );
    }
}

#[test]
fn test_non_integer_guess() {
    let err = validate_guesses(&["3:b"]).unwrap_err();
    assert!(matches!(err, RoundError::ParseFailure { ref input, .. } if input == "3:b"));
    assert_eq!(err.input(), "3:b");
}

#[test]
fn test_guess_bounds() {
    assert!(validate_guesses(&["9:9", "0:0"]).is_ok());
    for input in ["10:0", "0:10", "-1:3"] {
        assert_eq!(
            validate_guesses(&[input]).unwrap_err(),
            RoundError::OutOfBounds {
                input: input.into()
            }
        );
    }
}

#[test]
fn test_whitespace_is_trimmed() {
    let set = GuessSet::parse(&[" 4 : 5 "]).unwrap();
    assert_eq!(set.guesses(), &[Coordinate::new(4, 5).unwrap()]);
}

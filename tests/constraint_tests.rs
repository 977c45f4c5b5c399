use word_filter::{Constraint, ConstraintKind, ConstraintSet, InvalidInputError, Letter, Position};

fn letter(c: char) -> Letter {
    Letter::try_from(c).unwrap()
}

#[test]
fn test_letter_parse() {
    assert_eq!(Letter::parse("a").unwrap().as_char(), 'a');
    assert_eq!(Letter::parse(" Q ").unwrap().as_char(), 'q');
}

#[test]
fn test_letter_parse_rejects_bad_input() {
    assert_eq!(Letter::parse(""), Err(InvalidInputError::EmptyLetter));
    assert_eq!(Letter::parse("  "), Err(InvalidInputError::EmptyLetter));
    assert_eq!(Letter::parse("ab"), Err(InvalidInputError::NotALetter("ab".to_string())));
    assert_eq!(Letter::parse("3"), Err(InvalidInputError::NotALetter("3".to_string())));
    assert!(Letter::try_from('-').is_err());
}

#[test]
fn test_letter_with_multi_char_lowercase() {
    assert_eq!(Letter::parse("İ").unwrap().as_char(), 'i');
    assert_eq!(Letter::parse("É").unwrap().as_char(), 'é');
}

#[test]
fn test_position_from_one_based() {
    assert_eq!(Position::from_one_based("1").unwrap().index(), 0);
    assert_eq!(Position::from_one_based(" 5 ").unwrap().index(), 4);
    assert_eq!(Position::from_one_based("3").unwrap().one_based(), 3);
}

#[test]
fn test_position_rejects_bad_input() {
    assert_eq!(
        Position::from_one_based("x"),
        Err(InvalidInputError::InvalidPosition("x".to_string()))
    );
    assert_eq!(
        Position::from_one_based("0"),
        Err(InvalidInputError::PositionOutOfRange("0".to_string()))
    );
    assert_eq!(
        Position::from_one_based("-2"),
        Err(InvalidInputError::PositionOutOfRange("-2".to_string()))
    );
}

#[test]
fn test_position_overflow_is_out_of_range() {
    assert_eq!(
        Position::from_one_based("99999999999999999999"),
        Err(InvalidInputError::PositionOutOfRange("99999999999999999999".to_string()))
    );
    assert_eq!(
        Position::from_one_based("-99999999999999999999"),
        Err(InvalidInputError::PositionOutOfRange("-99999999999999999999".to_string()))
    );
    assert_eq!(
        Position::from_one_based("1.5"),
        Err(InvalidInputError::InvalidPosition("1.5".to_string()))
    );
}

#[test]
fn test_kind_from_str() {
    assert_eq!("gray".parse::<ConstraintKind>(), Ok(ConstraintKind::Exclude));
    assert_eq!("Gray Tile:".parse::<ConstraintKind>(), Ok(ConstraintKind::Exclude));
    assert_eq!("contains".parse::<ConstraintKind>(), Ok(ConstraintKind::Require));
    assert_eq!("G".parse::<ConstraintKind>(), Ok(ConstraintKind::FixedAt));
    assert_eq!("Green Tile".parse::<ConstraintKind>(), Ok(ConstraintKind::FixedAt));
    assert_eq!("yellow".parse::<ConstraintKind>(), Ok(ConstraintKind::ExcludedAt));
    assert_eq!(
        "purple".parse::<ConstraintKind>(),
        Err(InvalidInputError::UnknownKind("purple".to_string()))
    );
}

#[test]
fn test_exclude_matches() {
    let constraint = Constraint::Exclude(letter('a'));
    assert!(!constraint.matches("apple"));
    assert!(constraint.matches("robot"));
}

#[test]
fn test_require_matches() {
    let constraint = Constraint::Require(letter('o'));
    assert!(constraint.matches("robot"));
    assert!(!constraint.matches("badge"));
}

#[test]
fn test_fixed_at_matches() {
    let constraint = Constraint::FixedAt {
        position: Position::new(2),
        letter: letter('g'),
    };
    assert!(constraint.matches("angle"));
    assert!(!constraint.matches("apple"));
    assert!(!constraint.matches("ag"));
}

#[test]
fn test_excluded_at_matches() {
    let constraint = Constraint::ExcludedAt {
        position: Position::new(1),
        letter: letter('b'),
    };
    assert!(!constraint.matches("abide"));
    assert!(constraint.matches("badge"));
    assert!(!constraint.matches("robot"));
}

#[test]
fn test_excluded_at_past_end_of_word() {
    let constraint = Constraint::ExcludedAt {
        position: Position::new(9),
        letter: letter('b'),
    };
    assert!(constraint.matches("badge"));
    assert!(!constraint.matches("crane"));
}

#[test]
fn test_set_replaces_by_position() {
    let mut set = ConstraintSet::new();
    set.insert(Constraint::FixedAt {
        position: Position::new(0),
        letter: letter('c'),
    });
    set.insert(Constraint::FixedAt {
        position: Position::new(0),
        letter: letter('s'),
    });

    assert_eq!(set.len(), 1);
    assert_eq!(set.fixed_at().get(&Position::new(0)), Some(&letter('s')));
}

#[test]
fn test_set_duplicate_letter_is_noop() {
    let mut set = ConstraintSet::new();
    set.insert(Constraint::Exclude(letter('e')));
    let before = set.clone();
    set.insert(Constraint::Exclude(letter('e')));
    assert_eq!(set, before);
}

#[test]
fn test_set_iter_order() {
    let set: ConstraintSet = [
        Constraint::ExcludedAt {
            position: Position::new(3),
            letter: letter('e'),
        },
        Constraint::FixedAt {
            position: Position::new(4),
            letter: letter('y'),
        },
        Constraint::Exclude(letter('z')),
        Constraint::Require(letter('r')),
        Constraint::Exclude(letter('a')),
        Constraint::FixedAt {
            position: Position::new(0),
            letter: letter('t'),
        },
    ]
    .into_iter()
    .collect();

    let kinds: Vec<_> = set.iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        [
            ConstraintKind::Exclude,
            ConstraintKind::Exclude,
            ConstraintKind::Require,
            ConstraintKind::FixedAt,
            ConstraintKind::FixedAt,
            ConstraintKind::ExcludedAt,
        ]
    );
    let first = set.iter().next().unwrap();
    assert_eq!(first, Constraint::Exclude(letter('a')));
}

#[test]
fn test_set_is_satisfied_by_all() {
    let set: ConstraintSet = [
        Constraint::Exclude(letter('s')),
        Constraint::FixedAt {
            position: Position::new(0),
            letter: letter('c'),
        },
        Constraint::ExcludedAt {
            position: Position::new(4),
            letter: letter('e'),
        },
    ]
    .into_iter()
    .collect();

    assert!(set.is_satisfied_by("cheap"));
    assert!(!set.is_satisfied_by("crane"));
    assert!(!set.is_satisfied_by("chess"));
    assert!(!set.is_satisfied_by("trace"));
}

#[test]
fn test_empty_set_accepts_everything() {
    let set = ConstraintSet::new();
    assert!(set.is_empty());
    assert!(set.is_satisfied_by("anything"));
    assert!(set.is_satisfied_by(""));
}

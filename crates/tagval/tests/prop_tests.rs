//! Property-based tests for the validation engine
//!
//! These tests check the engine's core guarantees across a wide range of
//! values and expressions.

use proptest::prelude::*;
use std::collections::BTreeMap;
use tagval::{
    parse_validators, split_validators, validate, Reflect, Validator, ValidatorType,
};

#[derive(Debug, Reflect)]
struct Untagged {
    number: i64,
    text: String,
    items: Vec<Option<u16>>,
    lookup: BTreeMap<String, f64>,
}

#[derive(Reflect)]
struct Equal {
    #[tag(validate = "eq=42")]
    value: i64,
}

#[derive(Reflect)]
struct Bounded {
    #[tag(validate = "gte=1&lte=10")]
    value: i32,
}

#[derive(Reflect)]
struct Either {
    #[tag(validate = "eq=1|eq=2")]
    value: i32,
}

#[derive(Reflect)]
struct Emails {
    #[tag(validate = "[format=email]")]
    owners: BTreeMap<String, String>,
}

/// Strategy for generating untagged values of every supported shape
fn untagged_strategy() -> impl Strategy<Value = Untagged> {
    (
        any::<i64>(),
        ".{0,20}",
        proptest::collection::vec(proptest::option::of(any::<u16>()), 0..5),
        proptest::collection::btree_map("[a-z]{0,8}", any::<f64>(), 0..5),
    )
        .prop_map(|(number, text, items, lookup)| Untagged {
            number,
            text,
            items,
            lookup,
        })
}

/// Strategy for generating validator types
fn validator_type_strategy() -> impl Strategy<Value = ValidatorType> {
    proptest::sample::select(ValidatorType::ALL.to_vec())
}

/// Strategy for generating well-formed arguments
fn argument_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "-?[0-9]{1,6}",
        "(true|false)",
        "[a-z]{1,8}",
        "[0-9]{1,3}(,[0-9]{1,3}){0,3}",
    ]
}

/// Strategy for generating OR-of-AND expressions as branches of validators
fn branches_strategy() -> impl Strategy<Value = Vec<Vec<Validator>>> {
    let validator = (validator_type_strategy(), argument_strategy())
        .prop_map(|(validator_type, argument)| Validator::new(validator_type, argument));
    proptest::collection::vec(proptest::collection::vec(validator, 1..4), 1..4)
}

proptest! {
    #[test]
    fn test_untagged_values_always_pass(value in untagged_strategy()) {
        prop_assert!(validate(&value).is_ok());
    }

    #[test]
    fn test_eq_holds_iff_equal(value in any::<i64>()) {
        let result = validate(&Equal { value });
        if value == 42 {
            prop_assert!(result.is_ok());
        } else {
            let err = result.unwrap_err();
            prop_assert_eq!(err.as_validation().map(|e| e.validator_type), Some(ValidatorType::Eq));
        }
    }

    #[test]
    fn test_bounds(value in -100i32..100) {
        let result = validate(&Bounded { value });
        prop_assert_eq!(result.is_ok(), (1..=10).contains(&value));
        if let Err(err) = result {
            let expected = if value < 1 { ValidatorType::Gte } else { ValidatorType::Lte };
            prop_assert_eq!(err.as_validation().map(|e| e.validator_type), Some(expected));
        }
    }

    #[test]
    fn test_or_branches(value in -5i32..5) {
        prop_assert_eq!(validate(&Either { value }).is_ok(), value == 1 || value == 2);
    }

    #[test]
    fn test_map_keys_are_checked(keys in proptest::collection::btree_set("[a-z]{1,8}(@[a-z]{1,8}\\.com)?", 1..5)) {
        let all_emails = keys.iter().all(|key| key.contains('@'));
        let owners = keys.into_iter().map(|key| (key, String::new())).collect();
        let result = validate(&Emails { owners });
        prop_assert_eq!(result.is_ok(), all_emails);
        if let Err(err) = result {
            prop_assert_eq!(err.as_validation().map(|e| e.validator_type), Some(ValidatorType::Format));
        }
    }

    #[test]
    fn test_parse_display_round_trip(branches in branches_strategy()) {
        let expression = tagval::Expression { branches };
        let parsed = parse_validators(&expression.to_string()).unwrap();
        prop_assert_eq!(parsed, expression);
    }

    #[test]
    fn test_unbalanced_brackets_never_split(prefix in "[a-z=&|]{0,10}", inner in "[a-z=&|]{0,10}") {
        let text = format!("{}[{}", prefix, inner);
        let err = split_validators(&text).unwrap_err();
        prop_assert_eq!(err.comment, "expected \"]\"");
    }

    #[test]
    fn test_split_without_brackets_or_gt_keeps_value(text in "[a-z0-9=&| ]{0,30}") {
        let split = split_validators(&text).unwrap();
        prop_assert_eq!(split.key, "");
        prop_assert_eq!(&*split.value, text.as_str());
        prop_assert_eq!(split.remaining, "");
    }
}

use fallible::{
    Error, ErrorKind,
    Result::{self, Failure, Success},
};
use proptest::prelude::*;

fn error_strategy() -> impl Strategy<Value = Error> {
    prop_oneof![
        Just(Error::absent()),
        "[a-z ]{0,12}".prop_map(|message: String| Error::validation(message)),
        "[a-z ]{0,12}".prop_map(|message: String| Error::panic(message)),
    ]
}

fn result_strategy() -> impl Strategy<Value = Result<i64>> {
    prop_oneof![
        any::<i64>().prop_map(|value| -> Result<i64> { Success(value) }),
        error_strategy().prop_map(|error| -> Result<i64> { Failure(error) }),
    ]
}

proptest! {
    #[test]
    fn of_present_value_is_success(value in any::<i64>()) {
        let result = Result::of(Some(value));
        prop_assert!(result.is_success());
        prop_assert_eq!(result.into_success(), Some(value));
    }

    #[test]
    fn map_identity_preserves_result(result in result_strategy()) {
        prop_assert_eq!(result.clone().map(|x| x), result);
    }

    #[test]
    fn map_fails_only_on_failure_or_panic(result in result_strategy(), limit in any::<i64>()) {
        let mapped = result.clone().map(|x| {
            assert!(x <= limit, "over limit");
            x.wrapping_mul(2)
        });
        match result {
            Failure(error) => prop_assert_eq!(mapped, Failure(error)),
            Success(x) if x > limit => {
                prop_assert_eq!(mapped, Failure(Error::panic("over limit")));
            }
            Success(x) => prop_assert_eq!(mapped, Success(x.wrapping_mul(2))),
        }
    }

    #[test]
    fn map_composes(result in result_strategy()) {
        let f = |x: i64| x.wrapping_add(3);
        let g = |x: i64| x.wrapping_mul(5);
        prop_assert_eq!(result.clone().map(f).map(g), result.map(|x| g(f(x))));
    }

    #[test]
    fn or_else_returns_value_or_default(result in result_strategy(), default in any::<i64>()) {
        let expected = match &result {
            Success(value) => *value,
            Failure(_) => default,
        };
        prop_assert_eq!(result.or_else(default), expected);
    }

    #[test]
    fn and_discards_value_or_keeps_error(result in result_strategy(), next in any::<u8>()) {
        let sequenced = result.clone().and(Some(next));
        match result {
            Success(_) => prop_assert_eq!(sequenced, Success(next)),
            Failure(error) => prop_assert_eq!(sequenced, Failure(error)),
        }
    }

    #[test]
    fn chain_keeps_nested_error(value in any::<i64>(), error in error_strategy()) {
        let nested = error.clone();
        let chained: Result<i64> = Result::of(Some(value)).chain(move |_| Failure(nested));
        prop_assert_eq!(chained, Failure(error));
    }

    #[test]
    fn chain_left_identity(value in any::<i64>()) {
        let f = |x: i64| Result::of(x.checked_neg());
        prop_assert_eq!(Result::of(Some(value)).chain(f), f(value));
    }

    #[test]
    fn req_matches_predicate(value in any::<i64>(), message in "[a-z]{1,10}") {
        let checked = Result::of(Some(value)).req(|x| *x >= 0, message.clone());
        if value >= 0 {
            prop_assert_eq!(checked, Success(value));
        } else {
            let error = checked.into_failure().expect("negative values are rejected");
            prop_assert_eq!(error.kind(), ErrorKind::Validation);
            prop_assert_eq!(error.message(), message.as_str());
        }
    }

    #[test]
    fn hooks_are_transparent(result in result_strategy()) {
        let inspected = result
            .clone()
            .if_success(|_| {})
            .if_failure(|_| {})
            .handle(|_| {}, |_| {});
        prop_assert_eq!(inspected, result);
    }

    #[test]
    fn map_fold_sums(items in proptest::collection::vec(-1000_i64..1000, 0..32)) {
        let expected: i64 = items.iter().sum();
        let folded = Result::of(Some(items)).map_fold(0, |acc, x| acc + x);
        prop_assert_eq!(folded, Success(expected));
    }
}

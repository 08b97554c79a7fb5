use std::cell::Cell;
use std::collections::BTreeSet;

use outcome_rail::{Outcome, OutcomeError, Side};

#[test]
fn success_holds_its_value() {
    let outcome = Outcome::<i32, &str>::success(5);
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert_eq!(*outcome.success_unchecked(), 5);
    assert_eq!(outcome.into_success_unchecked(), 5);
}

#[test]
fn failure_holds_its_error() {
    let outcome = Outcome::<i32, &str>::failure("boom");
    assert!(outcome.is_failure());
    assert!(!outcome.is_success());
    assert_eq!(*outcome.failure_unchecked(), "boom");
    assert_eq!(outcome.into_failure_unchecked(), "boom");
}

#[test]
fn try_constructors_reject_absent_payloads() {
    let success = Outcome::<i32, &str>::try_success(None);
    assert_eq!(success.unwrap_err(), OutcomeError::AbsentPayload(Side::Success));

    let failure = Outcome::<i32, &str>::try_failure(None);
    assert_eq!(failure.unwrap_err(), OutcomeError::AbsentPayload(Side::Failure));
}

#[test]
fn try_constructors_accept_present_payloads() {
    let success = Outcome::<i32, &str>::try_success(Some(1)).unwrap();
    assert_eq!(success.into_success(), Some(1));

    let failure = Outcome::<i32, &str>::try_failure(Some("x")).unwrap();
    assert_eq!(failure.into_failure(), Some("x"));
}

#[test]
#[should_panic(expected = "invalid state: success payload requested from a failure")]
fn success_unchecked_panics_on_failure() {
    let outcome = Outcome::<i32, &str>::failure("boom");
    let _ = outcome.success_unchecked();
}

#[test]
#[should_panic(expected = "invalid state: failure payload requested from a success")]
fn failure_unchecked_panics_on_success() {
    let outcome = Outcome::<i32, &str>::success(1);
    let _ = outcome.failure_unchecked();
}

#[test]
#[should_panic(expected = "invalid state")]
fn into_success_unchecked_panics_on_failure() {
    let _ = Outcome::<i32, &str>::failure("boom").into_success_unchecked();
}

#[test]
#[should_panic(expected = "invalid state")]
fn into_failure_unchecked_panics_on_success() {
    let _ = Outcome::<i32, &str>::success(1).into_failure_unchecked();
}

#[test]
fn checked_getters_report_invalid_state() {
    let success = Outcome::<i32, &str>::success(1);
    assert_eq!(success.get_success(), Ok(&1));
    assert_eq!(
        success.get_failure(),
        Err(OutcomeError::InvalidState {
            expected: Side::Failure,
            found: Side::Success
        })
    );

    let failure = Outcome::<i32, &str>::failure("x");
    assert_eq!(failure.get_failure(), Ok(&"x"));
    assert_eq!(
        failure.get_success(),
        Err(OutcomeError::InvalidState {
            expected: Side::Success,
            found: Side::Failure
        })
    );
}

#[test]
fn of_nullable_wraps_present_or_falls_back() {
    let present = Outcome::of_nullable(Some("input"), "input can't be empty");
    assert_eq!(present.into_success(), Some("input"));

    let absent: Outcome<&str, &str> = Outcome::of_nullable(None, "input can't be empty");
    assert_eq!(absent.into_failure(), Some("input can't be empty"));
}

#[test]
fn of_nullable_with_is_lazy() {
    let calls = Cell::new(0);
    let present: Outcome<i32, String> = Outcome::of_nullable_with(Some(1), || {
        calls.set(calls.get() + 1);
        "absent".to_string()
    });
    assert!(present.is_success());
    assert_eq!(calls.get(), 0);

    let absent: Outcome<i32, String> = Outcome::of_nullable_with(None, || {
        calls.set(calls.get() + 1);
        "absent".to_string()
    });
    assert_eq!(absent.into_failure().as_deref(), Some("absent"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn of_optional_mirrors_of_nullable() {
    let port = Outcome::of_optional("8080".parse::<u16>().ok(), "invalid port");
    assert_eq!(port.into_success(), Some(8080));

    let port = Outcome::of_optional("http".parse::<u16>().ok(), "invalid port");
    assert_eq!(port.into_failure(), Some("invalid port"));

    let lazy: Outcome<u16, String> = Outcome::of_optional_with(None, || "empty".into());
    assert_eq!(lazy.into_failure().as_deref(), Some("empty"));
}

#[test]
fn inspection_runs_only_on_matching_branch() {
    let seen_success = Cell::new(None);
    let seen_failure = Cell::new(None);

    let outcome = Outcome::<i32, &str>::success(7)
        .if_success(|v| seen_success.set(Some(*v)))
        .if_failure(|e| seen_failure.set(Some(*e)));

    assert_eq!(seen_success.get(), Some(7));
    assert_eq!(seen_failure.get(), None);
    assert_eq!(outcome.into_success(), Some(7));

    let seen_success = Cell::new(None);
    let seen_failure = Cell::new(None);

    let outcome = Outcome::<i32, &str>::failure("bad")
        .if_failure(|e| seen_failure.set(Some(*e)))
        .if_success(|v| seen_success.set(Some(*v)));

    assert_eq!(seen_success.get(), None);
    assert_eq!(seen_failure.get(), Some("bad"));
    assert_eq!(outcome.into_failure(), Some("bad"));
}

#[test]
fn if_success_or_else_runs_exactly_one_effect() {
    let log = std::cell::RefCell::new(Vec::new());

    let _ = Outcome::<i32, &str>::success(1).if_success_or_else(
        |v| log.borrow_mut().push(format!("ok {v}")),
        |e| log.borrow_mut().push(format!("err {e}")),
    );
    let _ = Outcome::<i32, &str>::failure("x").if_success_or_else(
        |v| log.borrow_mut().push(format!("ok {v}")),
        |e| log.borrow_mut().push(format!("err {e}")),
    );

    assert_eq!(*log.borrow(), vec!["ok 1".to_string(), "err x".to_string()]);
}

#[test]
fn filter_keeps_or_rejects_successes() {
    let is_even = |v: &i32| v % 2 == 0;

    let four = Outcome::<i32, &str>::success(4).filter(is_even, "odd");
    assert_eq!(four.into_success(), Some(4));

    let three = Outcome::<i32, &str>::success(3).filter(is_even, "odd");
    assert_eq!(three.into_failure(), Some("odd"));
}

#[test]
fn filter_passes_failures_through() {
    let predicate_calls = Cell::new(0);
    let outcome = Outcome::<i32, &str>::failure("earlier").filter(
        |_| {
            predicate_calls.set(predicate_calls.get() + 1);
            true
        },
        "odd",
    );

    assert_eq!(outcome.into_failure(), Some("earlier"));
    assert_eq!(predicate_calls.get(), 0);
}

#[test]
fn filter_with_supplies_failure_only_on_rejection() {
    let calls = Cell::new(0);
    let supplier = || {
        calls.set(calls.get() + 1);
        "too small"
    };

    let kept = Outcome::<i32, &str>::success(10).filter_with(|v| *v > 5, supplier);
    assert!(kept.is_success());
    assert_eq!(calls.get(), 0);

    let rejected = Outcome::<i32, &str>::success(1).filter_with(|v| *v > 5, supplier);
    assert_eq!(rejected.into_failure(), Some("too small"));
    assert_eq!(calls.get(), 1);
}

fn parse(raw: &str) -> Outcome<i32, String> {
    match raw.parse() {
        Ok(value) => Outcome::success(value),
        Err(_) => Outcome::failure(format!("not a number: {raw}")),
    }
}

#[test]
fn and_binds_fallible_steps() {
    let ok = Outcome::<&str, String>::success("12").and(parse);
    assert_eq!(ok.into_success(), Some(12));

    let bad = Outcome::<&str, String>::success("twelve").and(parse);
    assert_eq!(bad.into_failure().as_deref(), Some("not a number: twelve"));
}

#[test]
fn and_propagates_existing_failure_without_calling_mapper() {
    let calls = Cell::new(0);
    let outcome = Outcome::<&str, String>::failure("upstream".to_string()).and(|raw| {
        calls.set(calls.get() + 1);
        parse(raw)
    });

    assert_eq!(outcome.into_failure().as_deref(), Some("upstream"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn chained_mappers_equal_combined_mapper() {
    let add_one = |v: i32| v + 1;
    let double = |v: i32| v * 2;

    let chained = Outcome::<i32, &str>::success(5)
        .and_result_of(add_one)
        .and_result_of(double);
    let combined = Outcome::<i32, &str>::success(5).and_result_of(|v| double(add_one(v)));
    assert_eq!(chained, combined);

    let bind_chained = Outcome::<i32, &str>::success(5)
        .and(|v| Outcome::success(add_one(v)))
        .and(|v| Outcome::success(double(v)));
    let bind_combined =
        Outcome::<i32, &str>::success(5).and(|v| Outcome::success(double(add_one(v))));
    assert_eq!(bind_chained, bind_combined);
}

#[test]
fn and_result_of_changes_success_type() {
    let outcome = Outcome::<&str, ()>::success("rail").and_result_of(str::len);
    assert_eq!(outcome.into_success(), Some(4));

    let failed = Outcome::<&str, &str>::failure("x").and_result_of(str::len);
    assert_eq!(failed.into_failure(), Some("x"));
}

#[test]
fn map_failure_only_touches_failures() {
    let failed = Outcome::<i32, u16>::failure(404).map_failure(|code| format!("HTTP {code}"));
    assert_eq!(failed.into_failure().as_deref(), Some("HTTP 404"));

    let ok = Outcome::<i32, u16>::success(1).map_failure(|code| format!("HTTP {code}"));
    assert_eq!(ok.into_success(), Some(1));
}

#[test]
fn map_both_applies_matching_mapper() {
    let ok = Outcome::<i32, &str>::success(2).map_both(|v| v * 10, str::len);
    assert_eq!(ok.into_success(), Some(20));

    let failed = Outcome::<i32, &str>::failure("four").map_both(|v| v * 10, str::len);
    assert_eq!(failed.into_failure(), Some(4));
}

#[test]
fn or_adopts_alternative_only_on_failure() {
    let primary = Outcome::<u16, &str>::success(8080);
    let kept = primary.or(Outcome::<u16, String>::success(9090));
    assert_eq!(kept.into_success(), Some(8080));

    let down = Outcome::<u16, &str>::failure("primary down");
    let fallback = down.or(Outcome::<u16, String>::failure("secondary down".into()));
    assert_eq!(fallback.into_failure().as_deref(), Some("secondary down"));
}

#[test]
fn or_with_supplier_is_lazy() {
    let calls = Cell::new(0);
    let supplier = || {
        calls.set(calls.get() + 1);
        Outcome::<i32, &str>::success(0)
    };

    let ok = Outcome::<i32, &str>::success(1).or_with(supplier);
    assert_eq!(ok.into_success(), Some(1));
    assert_eq!(calls.get(), 0);

    let recovered = Outcome::<i32, &str>::failure("x").or_with(supplier);
    assert_eq!(recovered.into_success(), Some(0));
    assert_eq!(calls.get(), 1);
}

#[test]
fn or_else_returns_payload_or_default() {
    assert_eq!(Outcome::<i32, &str>::success(3).or_else(0), 3);
    assert_eq!(Outcome::<i32, &str>::failure("x").or_else(0), 0);
}

#[test]
fn or_else_with_is_lazy() {
    let calls = Cell::new(0);
    let supplier = || {
        calls.set(calls.get() + 1);
        -1
    };

    assert_eq!(Outcome::<i32, &str>::success(3).or_else_with(supplier), 3);
    assert_eq!(calls.get(), 0);

    assert_eq!(Outcome::<i32, &str>::failure("x").or_else_with(supplier), -1);
    assert_eq!(calls.get(), 1);
}

#[test]
fn or_else_absent_escapes_to_option() {
    assert_eq!(Outcome::<i32, &str>::success(3).or_else_absent(), Some(3));
    assert_eq!(Outcome::<i32, &str>::failure("x").or_else_absent(), None);
}

#[derive(Debug, PartialEq)]
struct ConfigError(String);

#[test]
fn or_else_throw_never_builds_error_on_success() {
    let calls = Cell::new(0);
    let value = Outcome::<i32, &str>::success(3).or_else_throw(|e| {
        calls.set(calls.get() + 1);
        ConfigError(e.to_string())
    });

    assert_eq!(value, Ok(3));
    assert_eq!(calls.get(), 0);
}

#[test]
fn or_else_throw_propagates_mapped_error() {
    fn load() -> Result<i32, ConfigError> {
        let port = Outcome::<i32, &str>::failure("PORT not set")
            .or_else_throw(|e| ConfigError(e.to_string()))?;
        Ok(port + 1)
    }

    assert_eq!(load(), Err(ConfigError("PORT not set".to_string())));
}

#[test]
fn to_set_holds_zero_or_one_payload() {
    let set = Outcome::<i32, &str>::success(9).to_set();
    assert_eq!(set, BTreeSet::from([9]));

    let empty = Outcome::<i32, &str>::failure("x").to_set();
    assert!(empty.is_empty());
}

#[test]
fn to_optional_round_trips_success() {
    assert_eq!(Outcome::<i32, &str>::success(4).to_optional(), Some(4));
    assert_eq!(Outcome::<i32, &str>::failure("x").to_optional(), None);
}

#[test]
fn into_result_maps_variants() {
    assert_eq!(Outcome::<i32, &str>::success(4).into_result(), Ok(4));
    assert_eq!(Outcome::<i32, &str>::failure("x").into_result(), Err("x"));
}

#[test]
fn as_ref_borrows_payloads() {
    let outcome = Outcome::<String, String>::success("kept".to_string());
    let borrowed = outcome.as_ref().and_result_of(String::len);
    assert_eq!(borrowed.into_success(), Some(4));
    assert_eq!(outcome.into_success().as_deref(), Some("kept"));
}

#[test]
fn debug_and_display_use_variant_names() {
    assert_eq!(format!("{:?}", Outcome::<i32, &str>::success(1)), "Success(1)");
    assert_eq!(
        format!("{:?}", Outcome::<i32, &str>::failure("x")),
        "Failure(\"x\")"
    );
    assert_eq!(Outcome::<i32, &str>::success(1).to_string(), "Success(1)");
    assert_eq!(Outcome::<i32, &str>::failure("x").to_string(), "Failure(x)");
}

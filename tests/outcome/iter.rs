use outcome_rail::Outcome;

#[test]
fn success_yields_single_item() {
    let outcome = Outcome::<i32, &str>::success(3);
    assert_eq!(outcome.iter().collect::<Vec<_>>(), vec![&3]);
    assert_eq!(outcome.iter().size_hint(), (1, Some(1)));
    assert_eq!(outcome.iter_failure().count(), 0);
    assert_eq!(outcome.into_iter().collect::<Vec<_>>(), vec![3]);
}

#[test]
fn failure_yields_nothing() {
    let outcome = Outcome::<i32, &str>::failure("x");
    assert_eq!(outcome.iter().count(), 0);
    assert_eq!(outcome.iter_failure().collect::<Vec<_>>(), vec![&"x"]);
    assert_eq!(outcome.into_iter().size_hint(), (0, Some(0)));
}

#[test]
fn iterators_report_exact_size_and_stay_fused() {
    let outcome = Outcome::<i32, &str>::failure("x");
    let mut failures = outcome.iter_failure();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures.next(), Some(&"x"));
    assert_eq!(failures.size_hint(), (0, Some(0)));
    assert_eq!(failures.next(), None);
    assert_eq!(failures.next(), None);

    let mut successes = Outcome::<i32, &str>::success(2).into_iter();
    assert_eq!(successes.next(), Some(2));
    assert_eq!(successes.next(), None);
    assert_eq!(successes.next(), None);
}

#[test]
fn outcomes_flatten_into_their_successes() {
    let outcomes = vec![
        Outcome::<i32, &str>::success(1),
        Outcome::failure("skip"),
        Outcome::success(3),
    ];

    let borrowed: i32 = outcomes.iter().flatten().sum();
    assert_eq!(borrowed, 4);

    let owned: Vec<i32> = outcomes.into_iter().flatten().collect();
    assert_eq!(owned, vec![1, 3]);
}

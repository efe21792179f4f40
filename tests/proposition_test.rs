//! # Proposition Harness Tests
//!
//! Registration, normalization and the drive loop: invocation counts,
//! argument ordering, result collection, failure propagation and the reset of
//! the producer list after every run.

mod common;

use std::cell::Cell;

use common::init_logging;
use proposition::leaf::{bools, integer_range, strings, Value};
use proposition::{
    combine, cycle_through, BoxedProducer, Entropy, Error, Proposition, PropositionConfig,
    ProducerExt, Source,
};

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("{0} is odd")]
struct Odd(i64);

fn seeded(seed: u64, max_tests: usize) -> Proposition<i64> {
    Proposition::new(
        PropositionConfig::default()
            .with_seed(seed)
            .with_max_tests(max_tests),
    )
    .unwrap()
}

fn cycle(values: Vec<i64>) -> BoxedProducer<i64> {
    cycle_through(values).unwrap().boxed()
}

#[test]
fn test_hypothesis_runs_exactly_max_tests_times() {
    init_logging();
    for n in [1, 7, 100, 250] {
        let mut prop = seeded(1, n);
        prop.given(cycle(vec![1, 2, 3])).unwrap();
        let calls = Cell::new(0);
        prop.call(|_| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), n);
    }
}

#[test]
fn test_default_configuration() {
    let prop = Proposition::<i64>::default();
    assert_eq!(prop.config().max_tests, 100);
    assert_eq!(prop.config().reshuffle_chunk_size, 10);
}

#[test]
fn test_arguments_follow_registration_order() {
    let mut prop = seeded(2, 50);
    prop.given(cycle(vec![1]))
        .unwrap()
        .given(cycle(vec![20]))
        .unwrap()
        .given(cycle(vec![300]))
        .unwrap();
    prop.call(|args| assert_eq!(args, &[1, 20, 300][..]));
}

#[test]
fn test_first_values_are_not_skipped() {
    let mut prop = Proposition::new(
        PropositionConfig::default()
            .with_seed(3)
            .with_max_tests(10)
            .with_reshuffle_chunk_size(1),
    )
    .unwrap();
    prop.given(cycle((0..10).collect())).unwrap();
    let seen: Vec<i64> = prop
        .call_collect(|args| args[0])
        .into_iter()
        .map(|r| r.result)
        .collect();
    assert_eq!(seen, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_collection_equals_explicit_combine() {
    let build = |entropy: &mut Entropy| -> Vec<BoxedProducer<i64>> {
        vec![
            integer_range(entropy, 0, 9).unwrap().boxed(),
            integer_range(entropy, 100, 109).unwrap().boxed(),
            integer_range(entropy, 1000, 1009).unwrap().boxed(),
        ]
    };

    let mut literal = seeded(42, 200);
    let sources = build(&mut Entropy::from_seed(5));
    literal.given(sources).unwrap();
    let from_literal = literal.call_collect(|args| args[0]);

    let mut explicit = seeded(42, 200);
    let sources = build(&mut Entropy::from_seed(5));
    let combined = combine(explicit.entropy_mut(), sources).unwrap().boxed();
    explicit.given(combined).unwrap();
    let from_explicit = explicit.call_collect(|args| args[0]);

    assert_eq!(from_literal, from_explicit);
}

#[test]
fn test_collect_records_arguments_and_results() {
    let mut prop = seeded(4, 25);
    let first = integer_range(prop.entropy_mut(), -50, 50).unwrap().boxed();
    let second = integer_range(prop.entropy_mut(), -50, 50).unwrap().boxed();
    prop.given_each(vec![first, second]).unwrap();
    let records = prop.call_collect(|args| args[0] + args[1]);
    assert_eq!(records.len(), 25);
    for record in &records {
        assert_eq!(record.arguments.len(), 2);
        assert_eq!(record.result, record.arguments[0] + record.arguments[1]);
    }
}

#[test]
fn test_producers_cleared_and_config_kept() {
    let mut prop = seeded(5, 10);
    prop.given(cycle(vec![1])).unwrap();
    assert_eq!(prop.registered(), 1);
    prop.call(|_| {});
    assert_eq!(prop.registered(), 0);
    assert_eq!(prop.config().max_tests, 10);

    prop.given(cycle(vec![7])).unwrap().given(cycle(vec![8])).unwrap();
    let records = prop.call_collect(|args| args.to_vec());
    assert_eq!(records.len(), 10);
    assert!(records.iter().all(|r| r.result == vec![7, 8]));
    assert_eq!(prop.registered(), 0);
}

#[test]
fn test_empty_registration_still_runs() {
    let mut prop = seeded(6, 3);
    let records = prop.call_collect(|args| args.len());
    assert_eq!(records.iter().map(|r| r.result).collect::<Vec<_>>(), vec![0, 0, 0]);
}

#[test]
#[should_panic(expected = "falsified")]
fn test_panicking_hypothesis_propagates() {
    let mut prop = seeded(7, 100);
    prop.given(cycle(vec![1, 2, 3])).unwrap();
    prop.call(|args| {
        if args[0] == 3 {
            panic!("falsified by {}", args[0]);
        }
    });
}

#[test]
fn test_try_call_stops_at_first_failure() {
    init_logging();
    let mut prop = seeded(8, 100);
    prop.given(cycle(vec![2, 4, 6, 7])).unwrap();
    let calls = Cell::new(0);
    let err = prop
        .try_call(|args| {
            calls.set(calls.get() + 1);
            if args[0] % 2 == 0 {
                Ok(())
            } else {
                Err(Odd(args[0]))
            }
        })
        .err()
        .unwrap();

    assert_eq!(err.error, Odd(7));
    assert_eq!(err.arguments, vec![7]);
    assert_eq!(err.seed, 8);
    assert_eq!(calls.get(), err.iteration + 1);
    assert!(err.iteration < 100);
    assert!(err.to_string().contains("7 is odd"));
    assert_eq!(prop.registered(), 0);
}

#[test]
fn test_try_call_passes_when_hypothesis_holds() {
    let mut prop = seeded(9, 60);
    prop.given(cycle(vec![2, 4])).unwrap();
    assert!(prop.try_call(|args| if args[0] > 0 { Ok(()) } else { Err(Odd(args[0])) }).is_ok());
}

#[test]
fn test_same_seed_same_run() {
    let run = |seed| {
        let mut prop = seeded(seed, 50);
        let p = integer_range(prop.entropy_mut(), 0, 1_000_000).unwrap().boxed();
        prop.given(p).unwrap();
        prop.call_collect(|args| args[0])
    };
    assert_eq!(run(11), run(11));
    assert_ne!(run(11), run(12));
}

#[test]
fn test_heterogeneous_arguments_with_values() {
    let mut prop: Proposition<Value> = Proposition::with_seed(10);
    let flags = bools(prop.entropy_mut()).map(|b| Value::Bool(*b)).boxed();
    let words = strings(prop.entropy_mut(), 5)
        .map(|s| Value::Str(s.clone()))
        .boxed();
    prop.given(flags).unwrap().given(Source::from(words)).unwrap();
    prop.call(|args| {
        assert_eq!(args[0].kind(), "bool");
        assert_eq!(args[1].kind(), "str");
    });
}

#[test]
fn test_invalid_configuration_is_reported() {
    let result = Proposition::<i64>::new(PropositionConfig::default().with_max_tests(0));
    assert!(matches!(
        result.err(),
        Some(Error::NonPositive {
            parameter: "max_tests",
            ..
        })
    ));
}

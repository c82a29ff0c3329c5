//! Host-level tests for debouncing, clamping and refresh requests.
#![cfg(feature = "host")]

use digit_matrix::{DEBOUNCE_WINDOW, Digit, EdgeOutcome, InputController, Line};
use embassy_time::{Duration, Instant};
use proptest::prelude::*;

fn digit(value: u8) -> Digit {
    Digit::new(value).expect("digit in range")
}

fn at_ms(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

#[test]
fn increment_then_bounce_then_increment() {
    let input = InputController::new(Digit::MIN);

    assert_eq!(
        input.on_edge(Line::Increment, at_ms(0)),
        EdgeOutcome::Accepted(digit(1))
    );
    assert!(input.refresh_requested());

    assert_eq!(
        input.on_edge(Line::Increment, at_ms(100)),
        EdgeOutcome::Debounced
    );
    assert_eq!(input.digit(), digit(1));

    assert_eq!(
        input.on_edge(Line::Increment, at_ms(250)),
        EdgeOutcome::Accepted(digit(2))
    );
    assert_eq!(input.digit(), digit(2));
}

#[test]
fn decrement_at_zero_still_requests_refresh() {
    let input = InputController::new(Digit::MIN);

    assert_eq!(
        input.on_edge(Line::Decrement, at_ms(0)),
        EdgeOutcome::Accepted(Digit::MIN)
    );
    assert_eq!(input.digit(), Digit::MIN);
    assert!(input.refresh_requested());
    assert_eq!(input.take_refresh(), Some(Digit::MIN));
    assert!(!input.refresh_requested());
}

#[test]
fn increments_saturate_at_nine() {
    let input = InputController::new(Digit::MIN);

    for press in 0..12_u64 {
        input.on_edge(Line::Increment, at_ms(press * 300));
    }

    assert_eq!(input.digit(), Digit::MAX);
    assert_eq!(
        input.on_edge(Line::Increment, at_ms(12 * 300)),
        EdgeOutcome::Accepted(Digit::MAX)
    );
    assert_eq!(input.take_refresh(), Some(Digit::MAX));
}

#[test]
fn debounce_window_is_shared_by_both_lines() {
    let input = InputController::new(digit(5));

    input.on_edge(Line::Increment, at_ms(1_000));
    let _ = input.take_refresh();

    assert_eq!(
        input.on_edge(Line::Decrement, at_ms(1_150)),
        EdgeOutcome::Debounced
    );
    assert_eq!(input.digit(), digit(6));
    assert!(!input.refresh_requested());
}

#[test]
fn debounced_edge_leaves_state_untouched() {
    let input = InputController::new(digit(3));

    input.on_edge(Line::Decrement, at_ms(500));
    let _ = input.take_refresh();
    let last_press = input.last_press();

    assert_eq!(
        input.on_edge(Line::Increment, at_ms(600)),
        EdgeOutcome::Debounced
    );
    assert_eq!(input.digit(), digit(2));
    assert_eq!(input.last_press(), last_press);
    assert_eq!(input.last_press(), Some(at_ms(500)));
    assert_eq!(input.take_refresh(), None);
}

#[test]
fn edge_exactly_at_window_is_debounced() {
    let input = InputController::new(Digit::MIN);
    let start = at_ms(0);

    input.on_edge(Line::Increment, start);

    assert_eq!(
        input.on_edge(Line::Increment, start + DEBOUNCE_WINDOW),
        EdgeOutcome::Debounced
    );
    assert_eq!(
        input.on_edge(
            Line::Increment,
            start + DEBOUNCE_WINDOW + Duration::from_micros(1)
        ),
        EdgeOutcome::Accepted(digit(2))
    );
}

#[test]
fn edge_earlier_than_last_press_is_debounced() {
    let input = InputController::new(Digit::MIN);

    input.on_edge(Line::Increment, at_ms(1_000));

    assert_eq!(
        input.on_edge(Line::Increment, at_ms(10)),
        EdgeOutcome::Debounced
    );
    assert_eq!(input.digit(), digit(1));
}

#[test]
fn newer_refresh_replaces_unconsumed_one() {
    let input = InputController::new(Digit::MIN);

    input.on_edge(Line::Increment, at_ms(0));
    input.on_edge(Line::Increment, at_ms(300));

    assert_eq!(input.take_refresh(), Some(digit(2)));
    assert_eq!(input.take_refresh(), None);
}

#[test]
fn wait_refresh_returns_pending_digit() {
    let input = InputController::new(digit(7));

    input.on_edge(Line::Decrement, at_ms(0));

    assert_eq!(embassy_futures::block_on(input.wait_refresh()), digit(6));
    assert!(!input.refresh_requested());
}

#[test]
fn concurrent_edges_are_serialized() {
    const THREADS: u64 = 8;
    const EDGES_PER_THREAD: u64 = 2_000;
    static INPUT: InputController = InputController::new(Digit::MIN);

    let mut accepted: Vec<(Instant, Line)> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..THREADS)
            .map(|thread| {
                scope.spawn(move || {
                    let mut accepted = Vec::new();
                    for edge in 0..EDGES_PER_THREAD {
                        let line = if (edge + thread) % 2 == 0 {
                            Line::Increment
                        } else {
                            Line::Decrement
                        };
                        let timestamp = at_ms((edge * THREADS + thread) * 50);
                        if let EdgeOutcome::Accepted(_) = INPUT.on_edge(line, timestamp) {
                            accepted.push((timestamp, line));
                        }
                    }
                    accepted
                })
            })
            .collect();
        workers
            .into_iter()
            .flat_map(|worker| worker.join().expect("worker finished"))
            .collect()
    });

    // Accepted edges form one chain, each more than the window after the one before.
    accepted.sort_by_key(|&(timestamp, _)| timestamp);
    assert!(!accepted.is_empty());
    for pair in accepted.windows(2) {
        assert!(pair[1].0 - pair[0].0 > DEBOUNCE_WINDOW);
    }
    assert_eq!(INPUT.last_press(), accepted.last().map(|&(timestamp, _)| timestamp));

    // Replaying the chain in order gives the final digit: no step was lost.
    let expected = accepted
        .iter()
        .fold(Digit::MIN, |digit, &(_, line)| match line {
            Line::Increment => digit.saturating_increment(),
            Line::Decrement => digit.saturating_decrement(),
        });
    assert_eq!(INPUT.digit(), expected);
    assert!(INPUT.digit() <= Digit::MAX);
}

proptest! {
    #[test]
    fn spaced_presses_clamp_the_digit(
        start in 0..=9_u8,
        presses in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let input = InputController::new(digit(start));
        let mut expected = i32::from(start);

        for (index, &is_increment) in presses.iter().enumerate() {
            let index = u64::try_from(index).expect("small index");
            let line = if is_increment { Line::Increment } else { Line::Decrement };
            let outcome = input.on_edge(line, at_ms(index * 201));
            let step = if is_increment { 1 } else { -1 };
            expected = (expected + step).clamp(0, 9);
            let expected_digit = digit(u8::try_from(expected).expect("clamped"));
            prop_assert_eq!(outcome, EdgeOutcome::Accepted(expected_digit));
        }

        prop_assert_eq!(i32::from(u8::from(input.digit())), expected);
    }
}

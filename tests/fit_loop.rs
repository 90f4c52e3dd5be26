use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use decision_canvas::{FitLoop, FitState, PlaygroundError};

#[test]
fn state_machine_rejects_second_start() {
    let mut state = FitState::Idle;
    assert_eq!(state.next_pass(), None);

    state.start().unwrap();
    assert!(matches!(state.start(), Err(PlaygroundError::AlreadyRunning)));
    assert_eq!(state.next_pass(), Some(1));
    assert_eq!(state.next_pass(), Some(2));

    assert!(state.stop());
    assert!(!state.stop());
    assert_eq!(state, FitState::Idle);

    // A fresh run counts from one again.
    state.start().unwrap();
    assert_eq!(state.next_pass(), Some(1));
}

#[test]
fn loop_ticks_until_cancelled() {
    let ticks = Arc::new(AtomicU64::new(0));
    let counter = ticks.clone();
    let handle = FitLoop::spawn(Duration::from_millis(5), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        ControlFlow::Continue(())
    })
    .unwrap();

    thread::sleep(Duration::from_millis(100));
    handle.cancel();

    let after_cancel = ticks.load(Ordering::SeqCst);
    assert!(after_cancel >= 2, "only {after_cancel} ticks ran");

    thread::sleep(Duration::from_millis(30));
    assert_eq!(ticks.load(Ordering::SeqCst), after_cancel);
}

#[test]
fn tick_can_end_the_loop() {
    let handle = FitLoop::spawn(Duration::from_millis(1), |tick| {
        if tick >= 3 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    })
    .unwrap();

    for _ in 0..200 {
        if handle.is_finished() {
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }
    assert!(handle.is_finished());
}

#[test]
fn dropping_the_handle_stops_the_loop() {
    let ticks = Arc::new(AtomicU64::new(0));
    let counter = ticks.clone();
    let handle = FitLoop::spawn(Duration::from_millis(5), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        ControlFlow::Continue(())
    })
    .unwrap();

    thread::sleep(Duration::from_millis(30));
    drop(handle);
    thread::sleep(Duration::from_millis(30));
    let settled = ticks.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(30));
    assert_eq!(ticks.load(Ordering::SeqCst), settled);
}

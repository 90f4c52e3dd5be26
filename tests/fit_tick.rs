use std::ops::ControlFlow;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use decision_canvas::{Demo, FitHandle, FitLoop, PlaygroundConfig, Session, UiEvent};

fn fitting_session() -> Session {
    let config = PlaygroundConfig { seed: Some(17), ..PlaygroundConfig::default() };
    let mut session = Session::new(Demo::Logistic, config);
    session.handle(UiEvent::PointAdded { pixel_x: 150.0, pixel_y: 150.0 }).unwrap();
    session.handle(UiEvent::PointAdded { pixel_x: 450.0, pixel_y: 450.0 }).unwrap();
    session.handle(UiEvent::StartFitRequested).unwrap();
    session
}

fn wait_until_finished(handle: &FitHandle) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !handle.is_finished() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(2));
    }
    assert!(handle.is_finished(), "fit loop still running");
}

#[test]
fn loop_reports_passes_in_order_until_stopped() {
    let session = Arc::new(Mutex::new(fitting_session()));
    let run = session.lock().unwrap().fit_run().unwrap();
    let (tx, rx) = mpsc::sync_channel(1024);

    let shared = session.clone();
    let handle = FitLoop::spawn(Duration::from_millis(2), move |_| {
        let mut session = shared.lock().unwrap();
        session.fit_tick(run, &tx)
    })
    .unwrap();

    for expected in 1..=3 {
        let report = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(report.demo, Demo::Logistic);
        assert_eq!(report.stats.pass, expected);
        assert_eq!(report.stats.examples, 2);
    }

    let passes_at_stop = {
        let mut session = session.lock().unwrap();
        session.handle(UiEvent::StopFitRequested).unwrap();
        session.last_report().unwrap().stats.pass
    };
    wait_until_finished(&handle);

    let mut last = 3;
    while let Ok(report) = rx.try_recv() {
        assert_eq!(report.stats.pass, last + 1);
        last = report.stats.pass;
    }
    assert_eq!(last, passes_at_stop);
    assert_eq!(session.lock().unwrap().last_report().unwrap().stats.pass, passes_at_stop);
}

#[test]
fn loop_ends_when_observer_is_gone() {
    let session = Arc::new(Mutex::new(fitting_session()));
    let run = session.lock().unwrap().fit_run().unwrap();
    let (tx, rx) = mpsc::sync_channel(4);
    drop(rx);

    let shared = session.clone();
    let handle = FitLoop::spawn(Duration::from_millis(1), move |_| {
        let mut session = shared.lock().unwrap();
        session.fit_tick(run, &tx)
    })
    .unwrap();
    wait_until_finished(&handle);

    // The pass that found the observer gone still ran; nothing after it.
    assert_eq!(session.lock().unwrap().last_report().unwrap().stats.pass, 1);
}

#[test]
fn stale_run_does_not_train_the_new_one() {
    let mut session = fitting_session();
    let first = session.fit_run().unwrap();
    session.handle(UiEvent::StopFitRequested).unwrap();
    assert_eq!(session.fit_run(), None);

    session.handle(UiEvent::StartFitRequested).unwrap();
    let second = session.fit_run().unwrap();
    assert_ne!(first, second);

    let (tx, rx) = mpsc::sync_channel(4);
    assert_eq!(session.fit_tick(first, &tx), ControlFlow::Break(()));
    assert!(session.last_report().is_none());

    assert_eq!(session.fit_tick(second, &tx), ControlFlow::Continue(()));
    assert_eq!(rx.try_recv().unwrap().stats.pass, 1);
}

#[test]
fn full_observer_drops_reports_but_keeps_training() {
    let mut session = fitting_session();
    let run = session.fit_run().unwrap();
    let (tx, rx) = mpsc::sync_channel(1);

    assert_eq!(session.fit_tick(run, &tx), ControlFlow::Continue(()));
    assert_eq!(session.fit_tick(run, &tx), ControlFlow::Continue(()));
    assert_eq!(session.last_report().unwrap().stats.pass, 2);

    assert_eq!(rx.try_recv().unwrap().stats.pass, 1);
    assert!(rx.try_recv().is_err());
}

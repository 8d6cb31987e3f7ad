use std::sync::Arc;
use std::time::Duration;

use rollclock_core::{ClockFace, ClockState, FaceStyle, FixedTimeSource, Time};

const INTERVAL: Duration = Duration::from_millis(20);
const WAIT: Duration = Duration::from_secs(2);

fn t(h: u32, m: u32, s: u32) -> Time {
    Time::new(h, m, s).unwrap()
}

#[test]
fn ticker_publishes_to_subscribers() {
    let source = Arc::new(FixedTimeSource::new(t(12, 34, 56)));
    let clock = ClockState::with_interval(source.clone(), INTERVAL);
    let rx = clock.subscribe();

    clock.start().unwrap();
    assert_eq!(rx.recv_timeout(WAIT).unwrap(), t(12, 34, 56));

    source.set(t(12, 34, 57));
    let seen = loop {
        let time = rx.recv_timeout(WAIT).unwrap();
        if time != t(12, 34, 56) {
            break time;
        }
    };
    assert_eq!(seen, t(12, 34, 57));
    assert_eq!(clock.latest(), t(12, 34, 57));

    clock.stop();
    assert!(!clock.is_running());
}

#[test]
fn no_publish_after_stop() {
    let source = Arc::new(FixedTimeSource::new(t(1, 0, 0)));
    let clock = ClockState::with_interval(source.clone(), INTERVAL);
    let rx = clock.subscribe();

    clock.start().unwrap();
    rx.recv_timeout(WAIT).unwrap();
    clock.stop();
    while rx.try_recv().is_ok() {}

    source.set(t(2, 0, 0));
    std::thread::sleep(INTERVAL * 5);
    assert!(rx.try_recv().is_err());
    assert_eq!(clock.latest(), t(1, 0, 0));
}

#[test]
fn drop_stops_ticker() {
    let source = Arc::new(FixedTimeSource::new(t(3, 0, 0)));
    let rx = {
        let clock = ClockState::with_interval(source, INTERVAL);
        let rx = clock.subscribe();
        clock.start().unwrap();
        rx.recv_timeout(WAIT).unwrap();
        rx
    };
    while rx.try_recv().is_ok() {}
    assert!(rx.recv_timeout(INTERVAL * 5).is_err());
}

#[test]
fn face_follows_published_times() {
    let source = Arc::new(FixedTimeSource::new(t(23, 59, 59)));
    let clock = ClockState::with_interval(source.clone(), INTERVAL);
    let rx = clock.subscribe();
    let mut face = ClockFace::new(FaceStyle::default(), clock.latest());

    clock.start().unwrap();
    source.advance();

    let mut moved = 0;
    while face.time() != Time::MIDNIGHT {
        let time = rx.recv_timeout(WAIT).unwrap();
        moved += face.update(time).len();
    }
    assert_eq!(moved, 6);
    clock.stop();
}

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use taja::runtime::{event_channel, Event};
use taja::session::{KeyStroke, Session, Status};
use taja::timer::{ManualScheduler, ThreadScheduler, TickScheduler};
use taja::words::FixedSource;

// Headless integration: a real event channel and a fast ticker drive whole
// sessions without a TTY. Keystrokes and ticks share one queue, exactly as
// in the app loop.

fn fixed_session(words: &[&str], secs: u64, scheduler: Box<dyn TickScheduler>) -> Session {
    Session::new(
        Box::new(FixedSource::new(words)),
        scheduler,
        words.len(),
        secs,
    )
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

/// The same folding the app loop performs on a key-down.
fn apply_key(session: &mut Session, field: &mut String, event: KeyEvent) {
    match event.code {
        KeyCode::Backspace => {
            session.handle_key(KeyStroke::Backspace);
            field.pop();
            session.sync_input(field);
        }
        KeyCode::Char(' ') => {
            session.handle_key(KeyStroke::Space);
            field.clear();
        }
        KeyCode::Char(c) => {
            session.handle_key(KeyStroke::Char(c));
            field.push(c);
            session.sync_input(field);
        }
        _ => {}
    }
}

#[test]
fn headless_typing_flow_completes() {
    let (tx, rx) = event_channel();
    let scheduler = ThreadScheduler::new(tx.clone(), Duration::from_millis(5));
    let mut session = fixed_session(&["hi", "yo"], 60, Box::new(scheduler));
    let mut field = String::new();

    // Queue the full scripted session before the ticker starts competing
    // for the channel.
    for c in "hi yo ".chars() {
        tx.send(key(c)).unwrap();
    }

    session.start();

    for _ in 0..1000u32 {
        match rx.recv_timeout(Duration::from_secs(2)).unwrap() {
            Event::Tick => session.tick(),
            Event::Resize => {}
            Event::Key(k) => apply_key(&mut session, &mut field, k),
        }
        if session.status() == Status::Finished {
            break;
        }
    }

    assert_eq!(session.status(), Status::Finished);
    assert_eq!(session.tally().correct(), 2);
    assert_eq!(session.tally().incorrect(), 0);
    assert!(!session.timer_armed());
}

#[test]
fn timed_session_finishes_by_countdown() {
    let (tx, rx) = event_channel();
    let scheduler = ThreadScheduler::new(tx, Duration::from_millis(5));
    let mut session = fixed_session(&["hello"], 3, Box::new(scheduler));

    session.start();

    let mut ticks = 0u32;
    for _ in 0..200u32 {
        if let Event::Tick = rx.recv_timeout(Duration::from_secs(2)).unwrap() {
            session.tick();
            ticks += 1;
        }
        if session.status() == Status::Finished {
            break;
        }
    }

    assert_eq!(session.status(), Status::Finished);
    // Three decrements plus the tick that finds zero.
    assert_eq!(ticks, 4);
    assert_eq!(session.countdown(), 3);
    assert!(!session.timer_armed());
}

#[test]
fn keystrokes_and_ticks_share_one_queue() {
    let (tx, rx) = event_channel();
    let scheduler = ThreadScheduler::new(tx.clone(), Duration::from_millis(5));
    let mut session = fixed_session(&["cat", "dog", "fox"], 1000, Box::new(scheduler));
    let mut field = String::new();

    session.start();

    // Trickle the keystrokes in so ticks genuinely interleave with them in
    // the queue.
    let sender = std::thread::spawn(move || {
        for c in "cat dgo fox ".chars() {
            tx.send(key(c)).unwrap();
            std::thread::sleep(Duration::from_millis(3));
        }
    });

    for _ in 0..2000u32 {
        match rx.recv_timeout(Duration::from_secs(2)).unwrap() {
            Event::Tick => session.tick(),
            Event::Resize => {}
            Event::Key(k) => apply_key(&mut session, &mut field, k),
        }
        if session.status() == Status::Finished {
            break;
        }
    }
    sender.join().unwrap();

    assert_eq!(session.status(), Status::Finished);
    assert_eq!(session.tally().commits(), 3);
    assert_eq!(session.tally().correct(), 2);
    assert_eq!(session.tally().incorrect(), 1);
    assert_eq!(session.countdown(), 1000); // finish resets the display
}

#[test]
fn session_cycles_through_restart() {
    let mut session = fixed_session(&["ox"], 60, Box::new(ManualScheduler));
    let mut field = String::new();

    session.start();
    for c in "ox ".chars() {
        apply_key(
            &mut session,
            &mut field,
            KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
        );
    }
    assert_eq!(session.status(), Status::Finished);
    assert_eq!(session.tally().correct(), 1);

    session.start();
    assert_eq!(session.status(), Status::Started);
    assert_eq!(session.tally().commits(), 0);
    assert_eq!(session.words(), ["ox"]);
    assert_eq!(session.input_buffer(), "");

    apply_key(
        &mut session,
        &mut field,
        KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
    );
    assert_eq!(session.status(), Status::Finished);
    assert_eq!(session.tally().incorrect(), 1);
}

#[test]
fn events_after_finish_are_dropped() {
    let mut session = fixed_session(&["ox"], 60, Box::new(ManualScheduler));
    let mut field = String::new();

    session.start();
    for c in "ox ".chars() {
        apply_key(
            &mut session,
            &mut field,
            KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
        );
    }
    assert_eq!(session.status(), Status::Finished);

    // A stale tick and a stray keystroke queued behind the finish.
    session.tick();
    apply_key(
        &mut session,
        &mut field,
        KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
    );

    assert_eq!(session.status(), Status::Finished);
    assert_eq!(session.countdown(), 60);
    assert_eq!(session.tally().commits(), 1);
}

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// Unified event type consumed by the app loop.
///
/// Keyboard input and countdown ticks funnel through one channel, so the
/// session only ever handles one event at a time and a tick can never
/// interleave with a half-processed keystroke.
#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// The channel shared by the input reader and any armed countdown timer.
pub fn event_channel() -> (Sender<Event>, Receiver<Event>) {
    mpsc::channel()
}

/// Forward crossterm keys and resizes into the shared channel.
///
/// Key releases are filtered out: the session counts physical key-downs,
/// and terminals reporting release events would otherwise double every
/// keystroke. The reader thread exits when the terminal stream errors or
/// the receiving side goes away.
pub fn spawn_input_reader(tx: Sender<Event>) {
    thread::spawn(move || loop {
        let forwarded = match event::read() {
            Ok(CtEvent::Key(key)) if key.kind != KeyEventKind::Release => {
                tx.send(Event::Key(key))
            }
            Ok(CtEvent::Resize(_, _)) => tx.send(Event::Resize),
            Ok(_) => Ok(()),
            Err(_) => break,
        };
        if forwarded.is_err() {
            break;
        }
    });
}

use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use hangterm::app::App;
use hangterm::config::{Config, GameConfig};
use hangterm::render::{Cue, Figure, GALLOWS_STAGES};
use hangterm::runtime::{Runner, TerminalInput};

// Headless integration using the internal runtime + App without a TTY.

fn app_for(word: &str, max_wrong_guesses: usize) -> App {
    let config = Config {
        game: GameConfig {
            word_list: vec![word.to_string()],
            max_wrong_guesses,
            ..GameConfig::default()
        },
        ..Config::default()
    };
    App::new(config, Some(11)).unwrap()
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Plays the events through the runner until they run out or Esc is
/// pressed, collecting the cue of every frame.
fn drive(app: &mut App, events: Vec<Event>) -> Vec<Cue> {
    let (tx, rx) = mpsc::channel();
    for event in events {
        tx.send(event).unwrap();
    }
    drop(tx);

    let mut runner = Runner::new(TerminalInput::from_channel(rx), Duration::from_millis(5));

    let mut cues = Vec::new();
    runner
        .run(app, |app| {
            cues.extend(app.board.take_cue());
            Ok::<(), ()>(())
        })
        .unwrap();
    cues
}

#[test]
fn headless_round_is_won() {
    let mut app = app_for("hamlet", 10);
    let events = "HAMLET".chars().map(|c| key(KeyCode::Char(c))).collect();

    let cues = drive(&mut app, events);

    assert_eq!(
        cues,
        vec![Cue::Correct, Cue::Correct, Cue::Correct, Cue::Correct, Cue::Correct, Cue::Won]
    );
    assert_eq!(app.board.total_wins, 1);
    assert_eq!(app.board.masked_word(), "_ _ _ _ _ _");
    assert_eq!(app.board.figure(), Figure::Freed);
}

#[test]
fn headless_round_is_lost_and_bad_keys_signal() {
    let mut app = app_for("music", 2);
    let events = vec![
        key(KeyCode::Char('z')),
        key(KeyCode::Char('z')),
        key(KeyCode::Char('3')),
        key(KeyCode::Enter),
        Event::Resize(100, 30),
        key(KeyCode::Char('Q')),
    ];

    let cues = drive(&mut app, events);

    assert_eq!(cues, vec![Cue::Wrong, Cue::BadKey, Cue::BadKey, Cue::Lost]);
    assert_eq!(app.board.total_wins, 0);
    assert_eq!(app.board.last_word.as_deref(), Some("music"));
    assert!(app.board.wrong_letters.is_empty());
    assert_eq!(app.board.figure(), Figure::Gallows(GALLOWS_STAGES));
}

#[test]
fn headless_escape_stops_the_loop() {
    let mut app = app_for("truck", 10);
    let events = vec![
        key(KeyCode::Char('t')),
        key(KeyCode::Esc),
        key(KeyCode::Char('r')),
    ];

    drive(&mut app, events);

    // 'r' after Esc is never played
    assert_eq!(app.board.masked_word(), "t _ _ _ _");
}

#[test]
fn headless_ctrl_c_stops_the_loop() {
    let mut app = app_for("truck", 10);
    let events = vec![
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        key(KeyCode::Char('t')),
    ];

    let cues = drive(&mut app, events);

    assert!(cues.is_empty());
    assert_eq!(app.board.masked_word(), "_ _ _ _ _");
}

#[test]
fn ticks_expire_status_message() {
    let mut app = app_for("truck", 10);
    app.guess('!');
    assert!(app.board.message.is_some());

    for _ in 0..hangterm::render::MESSAGE_TICKS {
        assert!(app.on_tick());
    }
    assert!(app.board.message.is_none());
    assert!(!app.on_tick());
}

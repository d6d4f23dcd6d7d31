//! Arcade shell (default binary).
//!
//! Runs the launcher menu and the three games on a fixed 16ms timestep:
//! poll terminal events until the tick elapses, snapshot the tick's input,
//! update the active scene, draw. Each game is constructed fresh when
//! launched, with a seed taken from the system clock.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_arcade::core::hangman::HangmanPhase;
use tui_arcade::core::{HangmanGame, InvadersGame, Menu, MenuEntry, TetrisGame};
use tui_arcade::input::{should_quit, InputCollector};
use tui_arcade::term::{
    FrameBuffer, HangmanView, InvadersView, MenuView, TerminalRenderer, TetrisView,
};
use tui_arcade::types::TICK_MS;

enum Scene {
    Menu,
    Hangman(HangmanGame),
    Tetris(TetrisGame),
    Invaders(InvadersGame),
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut scene = Scene::Menu;
    let mut menu = Menu::new();
    let mut input = InputCollector::new();

    let menu_view = MenuView;
    let hangman_view = HangmanView;
    let tetris_view = TetrisView::default();
    let invaders_view = InvadersView;

    let mut fb = FrameBuffer::new(80, 24);
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        fb.resize(w, h);
        match &scene {
            Scene::Menu => menu_view.render(&menu, &mut fb),
            Scene::Hangman(game) => hangman_view.render(game, &mut fb),
            Scene::Tetris(game) => tetris_view.render(game, &mut fb),
            Scene::Invaders(game) => invaders_view.render(game, &mut fb),
        }
        term.present(&mut fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        input.on_key_press(key.code);
                    }
                    KeyEventKind::Repeat => {
                        // Auto-repeat never re-fires edges; held state is
                        // refreshed by the collector's press handling.
                        input.on_key_press(key.code);
                    }
                    KeyEventKind::Release => input.on_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let frame = input.take_frame();

            let mut next_scene = None;
            match &mut scene {
                Scene::Menu => {
                    if frame.cancel {
                        return Ok(());
                    }
                    match menu.update(&frame) {
                        Some(MenuEntry::Hangman) => {
                            next_scene = Some(Scene::Hangman(HangmanGame::new(time_seed())));
                        }
                        Some(MenuEntry::Tetris) => {
                            next_scene = Some(Scene::Tetris(TetrisGame::new(time_seed())));
                        }
                        Some(MenuEntry::Invaders) => {
                            next_scene = Some(Scene::Invaders(InvadersGame::new()));
                        }
                        Some(MenuEntry::Exit) => return Ok(()),
                        None => {}
                    }
                }
                Scene::Hangman(game) => {
                    let finished = game.phase() != HangmanPhase::Playing;
                    if frame.cancel || (finished && frame.confirm) {
                        next_scene = Some(Scene::Menu);
                    } else {
                        game.update(&frame);
                    }
                }
                Scene::Tetris(game) => {
                    if frame.cancel {
                        next_scene = Some(Scene::Menu);
                    } else {
                        game.update(TICK_MS, &frame);
                    }
                }
                Scene::Invaders(game) => {
                    if frame.cancel {
                        next_scene = Some(Scene::Menu);
                    } else {
                        game.update(TICK_MS, &frame);
                    }
                }
            }

            if let Some(next) = next_scene {
                scene = next;
                input.reset();
            }
        }
    }
}

/// Seed for a freshly launched game session.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

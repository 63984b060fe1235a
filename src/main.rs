//! Interactive terminal runner (default binary).
//!
//! The game is turn-based, so the loop simply blocks on the next key event;
//! there is no tick timer. All rules live in the engine - this adapter only
//! picks a slot, asks the scene to throw, and echoes events as status-line
//! messages.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event};

use tui_bricks::core::Scene;
use tui_bricks::term::{map_key, view, Cursor, TerminalRenderer, UiCommand};
use tui_bricks::types::{FieldSetting, WinRule};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, settings);
    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn parse_args(args: &[String]) -> Result<FieldSetting> {
    let mut settings = FieldSetting::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        i += 1;
        let value = args
            .get(i)
            .ok_or_else(|| anyhow!("missing value for {}", flag))?;
        match flag {
            "--size" => {
                let dim: usize = value
                    .parse()
                    .map_err(|_| anyhow!("invalid --size value: {}", value))?;
                settings.horz_dimension = dim;
                settings.vert_dimension = dim;
                if settings.side_dimension > dim {
                    settings.side_dimension = dim;
                }
            }
            "--side" => {
                settings.side_dimension = value
                    .parse()
                    .map_err(|_| anyhow!("invalid --side value: {}", value))?;
            }
            "--seed" => {
                settings.seed = value
                    .parse()
                    .map_err(|_| anyhow!("invalid --seed value: {}", value))?;
            }
            "--target" => {
                let target: u32 = value
                    .parse()
                    .map_err(|_| anyhow!("invalid --target value: {}", value))?;
                settings.win_rule = WinRule::ScoreAtLeast(target);
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(settings)
}

fn run(term: &mut TerminalRenderer, settings: FieldSetting) -> Result<()> {
    let mut scene = Scene::new(settings)?;
    let mut cursor = Cursor::new(settings.side_dimension);

    // Event cues shared with the listeners below.
    let message = Rc::new(RefCell::new(String::new()));

    let sink = Rc::clone(&message);
    scene.on_combination_destroyed(move |cells| {
        *sink.borrow_mut() = format!("destroyed {} squares!", cells.len());
    });
    let sink = Rc::clone(&message);
    scene.on_game_over(move || {
        *sink.borrow_mut() = "no legal move left".to_string();
    });
    let sink = Rc::clone(&message);
    scene.on_game_won(move || {
        *sink.borrow_mut() = "congratulations!".to_string();
    });

    loop {
        let lines = view::render(&scene, &cursor, &message.borrow());
        term.draw(&lines)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(command) = map_key(key) else {
            continue;
        };

        match command {
            UiCommand::Quit => return Ok(()),
            UiCommand::PrevSlot => cursor.prev_slot(),
            UiCommand::NextSlot => cursor.next_slot(),
            UiCommand::PrevSide => cursor.prev_side(),
            UiCommand::NextSide => cursor.next_side(),
            UiCommand::Throw => {
                message.borrow_mut().clear();
                if !scene.throw_square(cursor.side, cursor.slot)? && message.borrow().is_empty() {
                    *message.borrow_mut() = "blocked".to_string();
                }
            }
            UiCommand::Undo => {
                *message.borrow_mut() = if scene.back_to_previous_state() {
                    "undone".to_string()
                } else {
                    "nothing to undo".to_string()
                };
            }
            UiCommand::Restart => {
                scene.restart();
                message.borrow_mut().clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_bricks::types::DEFAULT_FIELD_DIMENSION;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_args_uses_defaults() {
        let settings = parse_args(&[]).unwrap();
        assert_eq!(settings.horz_dimension, DEFAULT_FIELD_DIMENSION);
    }

    #[test]
    fn parse_args_reads_size_seed_and_target() {
        let settings =
            parse_args(&strings(&["--size", "6", "--seed", "42", "--target", "300"])).unwrap();
        assert_eq!(settings.horz_dimension, 6);
        assert_eq!(settings.vert_dimension, 6);
        assert_eq!(settings.side_dimension, 6);
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.win_rule, WinRule::ScoreAtLeast(300));
    }

    #[test]
    fn parse_args_rejects_unknown_flags() {
        assert!(parse_args(&strings(&["--bogus", "1"])).is_err());
        assert!(parse_args(&strings(&["--size"])).is_err());
    }
}

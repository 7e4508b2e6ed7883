mod clock;
mod game;
mod grid;
mod snake;
mod term;

use std::{process::exit, thread::sleep, time::{Duration, Instant}};

use clock::Ticker;
use game::{GameState, GameStatus, StepResult};
use grid::Cell;
use snake::Heading::{self, *};
use term::{ScreenPos, TermManager};

use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};

pub type TermInt = u16;
pub type Coord = (u16, u16); // (row, col)

const GRID_SIZE: u16 = 10;
const TICK_INTERVAL_MS: u64 = 300;
const WIN_TARGET: u32 = 5;
const POLL_INTERVAL_MS: u64 = 5;

const SNAKE_BODY_CHAR: char = '█';
const APPLE_CHAR: char = 'O';
const DEAD_SNAKE_CHAR: char = 'X';

fn main() {
    let mut term = TermManager::new();

    // Room for the bordered board plus the message boxes
    let (min_w, min_h) = (32, GRID_SIZE + 3);
    let (w, h) = term.get_terminal_size();
    if w < min_w || h < min_h {
        eprintln!("Terminal too small: need at least {}x{}", min_w, min_h);
        exit(1);
    }

    term.setup();
    show_intro(&mut term);

    loop {
        // Each round ends on a blocking keypress; CTRL+C exits cleanly
        play(&mut term);
    }
}

fn show_intro(term: &mut TermManager) {
    term.show_message(&[
        "Arrow keys or WASD to move",
        &*format!("Eat {} apples to win", WIN_TARGET),
        "CTRL+C to quit",
        "",
        "Press any key to begin"
    ]);

    if is_ctrl_c(&term.read_key_blocking()) {
        clean_exit(term);
    }
}

fn play(term: &mut TermManager) {
    let mut rng = rand::thread_rng();
    let mut state = GameState::new(GRID_SIZE, WIN_TARGET, &mut rng)
        .expect("Error setting up the board.");
    let mut ticker = Ticker::new(TICK_INTERVAL_MS);
    let started = Instant::now();

    term.clear();
    term.draw_board_border(GRID_SIZE);
    draw_full_board(term, &state);
    draw_status(term, &state);
    term.flush();

    loop {
        sleep(Duration::from_millis(POLL_INTERVAL_MS));

        for key_ev in term.read_key_events_queue() {
            if is_ctrl_c(&key_ev) {
                clean_exit(term);
            }

            if let Some(heading) = heading_for_key(&key_ev) {
                let head_before = state.head();
                state.steer(heading);

                // A reversal swaps which end is the head; redraw to move the
                // head marker to the right end
                if state.head() != head_before {
                    draw_full_board(term, &state);
                    term.flush();
                }
            }
        }

        if !ticker.should_step(started.elapsed().as_millis() as u64) {
            continue;
        }

        match state.step(&mut rng).expect("Error advancing the game.") {
            StepResult::Moved { new_head, old_head, old_tail, new_food } => {
                term.print_at(cell_pos(new_head), head_char(state.heading()));
                term.print_at(cell_pos(old_head), SNAKE_BODY_CHAR);

                if let Some(tail) = old_tail {
                    term.print_at(cell_pos(tail), ' ');
                }

                if let Some(food) = new_food {
                    term.print_at(cell_pos(food), APPLE_CHAR);
                }

                draw_status(term, &state);
                term.flush();
            },
            StepResult::Won => {
                game_over(term, &state, true);
                break;
            },
            StepResult::Lost => {
                game_over(term, &state, false);
                break;
            },
        }
    }

    // Quit if the user CTRL+C's after the game
    if is_ctrl_c(&term.read_key_blocking()) {
        clean_exit(term);
    }
}

///////////////////////////////////////////////////////////////////////////

fn clean_exit(term: &mut TermManager) {
    term.restore();
    exit(0);
}

fn game_over(term: &mut TermManager, state: &GameState, win: bool) {
    let s = if win {"You won!"} else {"Game over!"};

    if !win {
        for pos in state.snake().segments() {
            term.print_at(cell_pos(pos), DEAD_SNAKE_CHAR);
        }
    }

    term.show_message(&[
        s,
        &*format!("Apples eaten: {}", state.apples_eaten()),
        "",
        "Press any key to play again,",
        "or CTRL+C to quit."
    ]);
}

fn draw_full_board(term: &mut TermManager, state: &GameState) {
    for (coord, cell) in state.grid().cells() {
        let ch = match cell {
            Cell::Empty => ' ',
            Cell::Food => APPLE_CHAR,
            Cell::Snake => SNAKE_BODY_CHAR,
        };
        term.print_at(cell_pos(coord), ch);
    }

    term.print_at(cell_pos(state.head()), head_char(state.heading()));
}

fn draw_status(term: &mut TermManager, state: &GameState) {
    if let GameStatus::Playing { apples_eaten, target } = state.status() {
        term.print_str((0, GRID_SIZE + 2), &format!("Apples: {}/{}", apples_eaten, target));
    }
}

// Game (row, col) to screen (x, y), offset by the border
fn cell_pos((row, col): Coord) -> ScreenPos {
    (col + 1, row + 1)
}

fn head_char(heading: Heading) -> char {
    match heading {
        Up => '^',
        Down => 'v',
        Left => '<',
        Right => '>',
    }
}

fn heading_for_key(ev: &KeyEvent) -> Option<Heading> {
    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Up),
        KeyCode::Char('a') | KeyCode::Left => Some(Left),
        KeyCode::Char('s') | KeyCode::Down => Some(Down),
        KeyCode::Char('d') | KeyCode::Right => Some(Right),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

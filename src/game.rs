use crate::grid::{Cell, Grid, GridError};
use crate::snake::{Heading, Snake};
use crate::Coord;

use rand::Rng;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

/// Status reported to the outside after each step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Playing { apples_eaten: u32, target: u32 },
    Won,
    Lost,
}

/// Per-step diff for the render sink: only the cells that changed.
#[derive(PartialEq, Eq, Debug)]
pub enum StepResult {
    Moved {
        new_head: Coord,
        old_head: Coord,
        old_tail: Option<Coord>,
        new_food: Option<Coord>,
    },
    Won,
    Lost,
}

/// The whole mutable game state. Owned by the run loop, advanced one `step`
/// at a time; input only ever goes through `steer`.
pub struct GameState {
    grid: Grid,
    snake: Snake,
    heading: Heading,
    target: u32,
    outcome: GameOutcome,
}

impl GameState {
    pub fn new(size: u16, target: u32, rng: &mut impl Rng) -> Result<Self, GridError> {
        let mut state = GameState {
            grid: Grid::new(size),
            snake: Snake::spawn((size / 2, size / 2)),
            heading: Heading::Right,
            target,
            outcome: GameOutcome::InProgress,
        };
        state.reset(rng)?;
        Ok(state)
    }

    /// Discards the previous game: empty grid, length-1 snake at the center
    /// heading right, one food at a random empty cell.
    pub fn reset(&mut self, rng: &mut impl Rng) -> Result<(), GridError> {
        // Precondition: the win target caps growth below grid capacity, which
        // is what keeps food placement from ever running out of cells.
        debug_assert!(self.grid.size() as u32 * self.grid.size() as u32 >= self.target + 2);

        self.grid.reset();

        let center = (self.grid.size() / 2, self.grid.size() / 2);
        self.snake = Snake::spawn(center);
        self.grid.set(center, Cell::Snake)?;

        let food = self.grid.random_empty_cell(rng)?;
        self.grid.set(food, Cell::Food)?;

        self.heading = Heading::Right;
        self.outcome = GameOutcome::InProgress;
        Ok(())
    }

    /// Advances the simulation by one tick. Deterministic given the rng;
    /// once the outcome is terminal this returns it again without mutating.
    pub fn step(&mut self, rng: &mut impl Rng) -> Result<StepResult, GridError> {
        match self.outcome {
            GameOutcome::Won => return Ok(StepResult::Won),
            GameOutcome::Lost => return Ok(StepResult::Lost),
            GameOutcome::InProgress => {}
        }

        let old_head = self.snake.head();
        let (d_row, d_col) = self.heading.delta();
        let next_row = old_head.0 as i32 + d_row;
        let next_col = old_head.1 as i32 + d_col;

        let size = self.grid.size() as i32;
        if next_row < 0 || next_col < 0 || next_row >= size || next_col >= size {
            self.outcome = GameOutcome::Lost;
            return Ok(StepResult::Lost);
        }

        let next = (next_row as u16, next_col as u16);

        // The tail cell still counts as occupied here even though it is about
        // to be vacated, so moving into it head-on is a crash.
        if self.grid.get(next)? == Cell::Snake {
            self.outcome = GameOutcome::Lost;
            return Ok(StepResult::Lost);
        }

        // Checked against the pre-move length: the win lands one tick after
        // the final apple, with the snake staying put.
        if self.apples_eaten() == self.target {
            self.outcome = GameOutcome::Won;
            return Ok(StepResult::Won);
        }

        let ate = self.grid.get(next)? == Cell::Food;

        self.grid.set(next, Cell::Snake)?;
        self.snake.push_head(next);

        let mut new_food = None;
        let mut old_tail = None;

        if ate {
            // Growth: keep the tail, replace the apple somewhere else
            let food = self.grid.random_empty_cell(rng)?;
            self.grid.set(food, Cell::Food)?;
            new_food = Some(food);
        } else if let Some(tail) = self.snake.pop_tail() {
            self.grid.set(tail, Cell::Empty)?;
            old_tail = Some(tail);
        }

        Ok(StepResult::Moved { new_head: next, old_head, old_tail, new_food })
    }

    /// Commits a requested heading. An exact reversal flips the snake's
    /// traversal order first (see `Snake::reverse_order`), so the next step
    /// extends from what used to be the tail. Each call commits immediately;
    /// with several calls between ticks the last one wins.
    pub fn steer(&mut self, requested: Heading) {
        if self.outcome != GameOutcome::InProgress {
            return;
        }

        if requested == self.heading.opposite() {
            self.snake.reverse_order();
        }
        self.heading = requested;
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome {
            GameOutcome::InProgress => GameStatus::Playing {
                apples_eaten: self.apples_eaten(),
                target: self.target,
            },
            GameOutcome::Won => GameStatus::Won,
            GameOutcome::Lost => GameStatus::Lost,
        }
    }

    pub fn apples_eaten(&self) -> u32 {
        self.snake.len() as u32 - 1
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Coord {
        self.snake.head()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }
}

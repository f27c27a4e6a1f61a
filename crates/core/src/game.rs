//! Game module - the board engine's state machine.
//!
//! Ties together the board, the RNG, and score bookkeeping. One engine
//! instance owns all mutable state; there are no ambient globals. The
//! engine does no I/O: best-score persistence is signalled to the caller
//! through a consumable event.

use crate::board::{Board, SlideOutcome};
use crate::rng::SimpleRng;
use crate::types::{Direction, GamePhase, Tile, SPAWN_DRAWS, SPAWN_FOUR_DRAW};

/// Result of one orchestrated turn ([`Game::update`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnOutcome {
    /// Whether the slide changed the board (a spawn followed iff true).
    pub moved: bool,
    /// Score gained by merges in this turn.
    pub score_gain: u32,
    /// Whether this turn ended the game.
    pub game_over: bool,
}

/// Complete engine state for one 2048 session.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rng: SimpleRng,
    score: u32,
    best_score: u32,
    phase: GamePhase,
    started: bool,
    /// Pending best-score change, consumed by the persistence caller.
    best_score_update: Option<u32>,
}

impl Game {
    /// Create a new engine with the given RNG seed.
    ///
    /// The board stays empty until [`Game::start`] spawns the first tile.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            rng: SimpleRng::new(seed),
            score: 0,
            best_score: 0,
            phase: GamePhase::Playing,
            started: false,
            best_score_update: None,
        }
    }

    /// Seed the session with a previously persisted best score.
    pub fn with_best_score(mut self, best_score: u32) -> Self {
        self.best_score = best_score;
        self
    }

    /// Start the game and spawn the first tile
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_random_tile();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn free_cells(&self) -> u8 {
        self.board.free_cells()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for tests, benches, and tooling.
    ///
    /// Gameplay code mutates the board only through [`Game::update`],
    /// [`Game::spawn_random_tile`], and [`Game::reset`].
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Slide the board without spawning or checking for game over.
    ///
    /// Score gained by merges is applied. Orchestration (spawn + terminal
    /// check) is [`Game::update`]'s job.
    pub fn slide(&mut self, dir: Direction) -> SlideOutcome {
        let outcome = self.board.slide(dir);
        self.score += outcome.score_gain;
        outcome
    }

    /// Spawn one tile on a uniformly chosen empty cell.
    ///
    /// The new tile is a 2 with probability 9/10, else a 4. No-op on a full
    /// board. Spawning never scores. Returns the spawned cell.
    pub fn spawn_random_tile(&mut self) -> Option<(u8, u8, Tile)> {
        let empties = self.board.empty_cells();
        if empties.is_empty() {
            return None;
        }

        let pick = self.rng.next_range(empties.len() as u32) as usize;
        let (x, y) = empties[pick];
        let value = if self.rng.next_range(SPAWN_DRAWS) == SPAWN_FOUR_DRAW {
            4
        } else {
            2
        };
        self.board.set_tile(x, y, value);
        Some((x, y, value))
    }

    /// Whether any legal move exists. Pure read.
    pub fn can_move(&self) -> bool {
        self.board.can_move()
    }

    /// Play one turn: slide, then on movement spawn a tile and check for
    /// the terminal state.
    ///
    /// No-op while game over or before [`Game::start`]. On the transition
    /// to game over the score is folded into the best score and a
    /// persistence event is emitted.
    pub fn update(&mut self, dir: Direction) -> TurnOutcome {
        if !self.started || self.phase == GamePhase::GameOver {
            return TurnOutcome::default();
        }

        let slide = self.slide(dir);
        let mut game_over = false;

        if slide.moved {
            self.spawn_random_tile();

            if !self.board.can_move() {
                self.phase = GamePhase::GameOver;
                self.fold_score_into_best();
                game_over = true;
            }
        }

        TurnOutcome {
            moved: slide.moved,
            score_gain: slide.score_gain,
            game_over,
        }
    }

    /// Begin a fresh game.
    ///
    /// The outgoing score is folded into the best score first (emitting a
    /// persistence event when it grew), then board and score reinitialize
    /// and one tile spawns.
    pub fn reset(&mut self) {
        self.fold_score_into_best();

        self.board.clear();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.started = true;

        self.spawn_random_tile();
    }

    /// Take the pending best-score change, if any.
    ///
    /// The caller persists the returned value; the engine itself never
    /// touches storage.
    pub fn take_best_score_update(&mut self) -> Option<u32> {
        self.best_score_update.take()
    }

    fn fold_score_into_best(&mut self) {
        if self.score > self.best_score {
            self.best_score = self.score;
            self.best_score_update = Some(self.best_score);
        }
    }

    /// Fill a snapshot allocation-free.
    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        self.board.write_grid(&mut out.grid);
        out.score = self.score;
        out.best_score = self.best_score;
        out.free_cells = self.board.free_cells();
        out.game_over = self.game_over();
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

//! A human-versus-engine session over line-oriented text I/O.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use oxo_core::{Board, Cell, Outcome, Player};
use oxo_engine::{analyse, best_move};

use crate::command::{Command, HELP, parse_command};
use crate::error::PlayError;

/// Settings adjustable during a session with `swap` / `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// The side the human plays. X moves first.
    pub human: Player,
}

impl SessionConfig {
    /// The side the engine plays.
    pub fn engine(&self) -> Player {
        !self.human
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { human: Player::X }
    }
}

/// Results across finished rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Tally {
    /// Count one finished round. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Number of finished rounds.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}  O: {}  Draws: {}", self.x_wins, self.o_wins, self.draws)
    }
}

/// What the session loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Reads commands from `input`, writes the transcript to `output`.
///
/// The engine replies synchronously after every human move, so the human
/// is always the one to move while the round is in progress.
pub struct Session<R, W> {
    input: R,
    output: W,
    board: Board,
    config: SessionConfig,
    tally: Tally,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with the default configuration (human plays X).
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, SessionConfig::default())
    }

    /// Create a session with the given configuration.
    pub fn with_config(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            board: Board::empty(),
            config,
            tally: Tally::default(),
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current configuration.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Results so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Run until `quit` or end of input, returning the final tally.
    ///
    /// Command errors are reported on `output` and the loop continues; only
    /// I/O failures end the session early.
    pub fn run(mut self) -> Result<Tally, PlayError> {
        info!(human = %self.config.human, "session started");
        writeln!(self.output, "oxo: tic-tac-toe against a perfect opponent. Type 'help' for commands.")?;
        self.start_round()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim();
            debug!(cmd = %trimmed, "received command");

            let flow = parse_command(trimmed).and_then(|cmd| self.handle(cmd));
            match flow {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(self.output, "error: {e}")?;
                }
            }
        }

        info!(tally = %self.tally, "session finished");
        self.output.flush()?;
        Ok(self.tally)
    }

    /// Execute one command.
    pub fn handle(&mut self, cmd: Command) -> Result<Flow, PlayError> {
        match cmd {
            Command::Place(index) => self.handle_place(index)?,
            Command::New => self.start_round()?,
            Command::Swap => {
                self.config.human = !self.config.human;
                self.start_round()?;
            }
            Command::First(first) => {
                self.config.human = if first { Player::X } else { Player::O };
                self.start_round()?;
            }
            Command::Hint => self.handle_hint()?,
            Command::Show => {
                self.print_board()?;
                writeln!(self.output, "{}", self.tally)?;
            }
            Command::Score => writeln!(self.output, "{}", self.tally)?,
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    /// Clear the board; the engine opens when it plays X.
    fn start_round(&mut self) -> Result<(), PlayError> {
        self.board = Board::empty();
        writeln!(self.output, "new game: you play {}", self.config.human)?;
        if self.config.engine() == Player::X {
            self.engine_move()?;
        } else {
            self.print_board()?;
        }
        Ok(())
    }

    fn handle_place(&mut self, index: usize) -> Result<(), PlayError> {
        if self.board.is_terminal() {
            return Err(PlayError::GameOver);
        }
        if self.board.next_player() != self.config.human {
            return Err(PlayError::NotYourTurn);
        }

        self.board = self.board.place(index, self.config.human)?;
        if self.board.is_terminal() {
            self.finish_round()?;
            return self.print_board();
        }
        self.engine_move()
    }

    fn engine_move(&mut self) -> Result<(), PlayError> {
        let engine = self.config.engine();
        let mv = best_move(&self.board, engine)?;
        self.board = self.board.place_cell(mv, engine)?;
        writeln!(self.output, "engine plays {mv}")?;
        if self.board.is_terminal() {
            self.finish_round()?;
        }
        self.print_board()
    }

    fn handle_hint(&mut self) -> Result<(), PlayError> {
        if self.board.is_terminal() {
            return Err(PlayError::GameOver);
        }
        let result = analyse(&self.board, self.config.human);
        let mv = result.best_move.map_or_else(|| "-".to_string(), |c: Cell| c.to_string());
        writeln!(
            self.output,
            "hint: {mv} (score {}, {} leaves searched)",
            result.score, result.nodes
        )?;
        Ok(())
    }

    fn finish_round(&mut self) -> Result<(), PlayError> {
        let outcome = self.board.outcome();
        self.tally.record(outcome);
        info!(%outcome, tally = %self.tally, "round finished");
        if let Some((line, _)) = self.board.winning_line() {
            writeln!(self.output, "winning line: {line}")?;
        }
        Ok(())
    }

    fn print_board(&mut self) -> Result<(), PlayError> {
        writeln!(self.output, "{}", self.board.pretty())?;
        writeln!(self.output, "{}", self.status())?;
        Ok(())
    }

    /// One-line status, as shown under the board.
    pub fn status(&self) -> String {
        match self.board.outcome() {
            Outcome::Draw => "Result: draw.".to_string(),
            Outcome::Win(p) if p == self.config.human => "Nice! You won.".to_string(),
            Outcome::Win(_) => "Tough one. AI won.".to_string(),
            Outcome::InProgress => format!("Your turn: {}", self.config.human),
        }
    }
}

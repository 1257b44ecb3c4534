//! Self-play harness: the engine (Black) against a seeded random player (White)
//!
//! White opens every game at the center; afterwards White picks uniformly
//! among the empty cells. The same seed replays the same games.

use std::fmt;
use std::time::{Duration, Instant};

use log::info;

use crate::board::{Pos, Stone};
use crate::engine::AIEngine;
use crate::error::Result;
use crate::game::Game;
use crate::rules::GameStatus;
use crate::search::SearchConfig;

/// Stone played by the engine in self-play
pub const AI_STONE: Stone = Stone::Black;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfPlayReport {
    pub games: u32,
    pub ai_wins: u32,
    pub random_wins: u32,
    pub draws: u32,
    pub ai_moves: u64,
    /// Total engine thinking time
    pub ai_time: Duration,
    /// Wall time of each game, in play order
    pub game_durations: Vec<Duration>,
}

impl SelfPlayReport {
    pub fn average_move_time(&self) -> Duration {
        mean(self.ai_time, u128::from(self.ai_moves))
    }

    pub fn average_game_duration(&self) -> Duration {
        let total: Duration = self.game_durations.iter().sum();
        mean(total, self.game_durations.len() as u128)
    }

    /// Share of games the engine won, in percent
    pub fn ai_win_rate(&self) -> f64 {
        self.rate(self.ai_wins)
    }

    pub fn random_win_rate(&self) -> f64 {
        self.rate(self.random_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    fn rate(&self, count: u32) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(count) * 100.0 / f64::from(self.games)
    }

    fn record(&mut self, status: GameStatus, duration: Duration) {
        self.games += 1;
        self.game_durations.push(duration);
        match status.winner() {
            Some(stone) if stone == AI_STONE => self.ai_wins += 1,
            Some(_) => self.random_wins += 1,
            None => self.draws += 1,
        }
    }
}

fn mean(total: Duration, count: u128) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    let nanos = total.as_nanos() / count;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

impl fmt::Display for SelfPlayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "games:         {}", self.games)?;
        writeln!(f, "ai wins:       {} ({:.2}%)", self.ai_wins, self.ai_win_rate())?;
        writeln!(f, "random wins:   {} ({:.2}%)", self.random_wins, self.random_win_rate())?;
        writeln!(f, "draws:         {} ({:.2}%)", self.draws, self.draw_rate())?;
        writeln!(f, "ai moves:      {}", self.ai_moves)?;
        writeln!(f, "avg ai move:   {:?}", self.average_move_time())?;
        write!(f, "avg game:      {:?}", self.average_game_duration())
    }
}

/// Play `games` full games and tally the outcomes.
pub fn run(config: SearchConfig, games: u32, seed: u64) -> Result<SelfPlayReport> {
    let engine = AIEngine::new(config)?;
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut report = SelfPlayReport::default();

    for index in 0..games {
        let start = Instant::now();
        let status = play_one(&engine, &mut rng, &mut report)?;
        let duration = start.elapsed();
        info!("game {}: {status} in {duration:?}", index + 1);
        report.record(status, duration);
    }

    Ok(report)
}

fn play_one(engine: &AIEngine, rng: &mut fastrand::Rng, report: &mut SelfPlayReport) -> Result<GameStatus> {
    let mut game = Game::with_first(AI_STONE.opponent());
    game.play(Pos::center())?;

    while !game.status().is_terminal() {
        if game.to_move() == AI_STONE {
            let result = game.play_ai(engine)?;
            report.ai_moves += 1;
            report.ai_time += result.elapsed;
        } else {
            let empty: Vec<Pos> = game.board().empty_cells().collect();
            let pos = empty[rng.usize(..empty.len())];
            game.play(pos)?;
        }
    }

    Ok(game.status())
}

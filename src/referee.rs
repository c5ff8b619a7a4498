//! The match controller: runs every game of a match between two opponents
//! and keeps their scores.

use log::{error, info};

use crate::board::Board;
use crate::common::{ShotOutcome, Side};
use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::protocol::HostMessage;
use crate::report::{GameReport, MatchLine, MatchSummary, SideReport};
use crate::score::{match_leader, GameOutcome, Score};
use crate::shot::resolve_shot;
use crate::tracker::HitTracker;
use crate::transport::Transport;

/// One side of the match: its name, its channels and its score.
pub struct Opponent {
    name: String,
    transport: Box<dyn Transport>,
    score: Score,
}

impl Opponent {
    pub fn new<T: Transport + 'static>(name: impl Into<String>, transport: T) -> Self {
        Self {
            name: name.into(),
            transport: Box::new(transport),
            score: Score::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    fn blame(&self, err: MatchError) -> MatchError {
        error!("{}: {}", self.name, err);
        err
    }
}

/// State of the game being played. Dropped when the game ends.
#[derive(Debug, Clone)]
pub struct Game {
    boards: [Board; 2],
    trackers: [HitTracker; 2],
    rounds: u32,
}

impl Game {
    pub fn new(board_a: Board, board_b: Board) -> Self {
        Self {
            boards: [board_a, board_b],
            trackers: [HitTracker::new(), HitTracker::new()],
            rounds: 0,
        }
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Hits landed on the board owned by `side`.
    pub fn tracker(&self, side: Side) -> &HitTracker {
        &self.trackers[side.index()]
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}

/// Referee of a match between opponent A and opponent B.
pub struct Referee {
    config: MatchConfig,
    a: Opponent,
    b: Opponent,
    games_played: u32,
}

impl Referee {
    pub fn new(config: MatchConfig, a: Opponent, b: Opponent) -> Self {
        Self {
            config,
            a,
            b,
            games_played: 0,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn opponent(&self, side: Side) -> &Opponent {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    fn opponent_mut(&mut self, side: Side) -> &mut Opponent {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }

    /// Play every configured game, handing each report to `on_game` as soon
    /// as the game ends, then tell both opponents the match is over.
    pub async fn run<F>(&mut self, mut on_game: F) -> Result<MatchSummary, MatchError>
    where
        F: FnMut(&GameReport) + Send,
    {
        info!(
            "match {} vs {}: {} games, at most {} rounds each",
            self.a.name, self.b.name, self.config.games, self.config.max_rounds
        );
        while self.games_played < self.config.games {
            let report = self.play_game().await?;
            on_game(&report);
        }
        self.finish().await
    }

    /// Play one game and update both scores.
    pub async fn play_game(&mut self) -> Result<GameReport, MatchError> {
        let number = self.games_played + 1;
        info!("game {} starting", number);
        let board_a = self.collect_board(Side::A).await?;
        let board_b = self.collect_board(Side::B).await?;
        let mut game = Game::new(board_a, board_b);

        while game.rounds < self.config.max_rounds {
            self.take_turn(Side::A, &mut game).await?;
            self.take_turn(Side::B, &mut game).await?;
            game.rounds += 1;
            if self.a.score.fleet_sunk() || self.b.score.fleet_sunk() {
                break;
            }
        }

        let outcome = GameOutcome::decide(&self.a.score, &self.b.score);
        outcome.apply(&mut self.a.score, &mut self.b.score);
        let report = GameReport {
            game: number,
            rounds: game.rounds,
            max_rounds: self.config.max_rounds,
            outcome,
            a: SideReport::new(&self.a.name, &self.a.score),
            b: SideReport::new(&self.b.name, &self.b.score),
        };
        info!("game {} over after {} rounds: {:?}", number, game.rounds, outcome);
        self.a.score.reset_game();
        self.b.score.reset_game();
        self.games_played += 1;
        Ok(report)
    }

    /// Send the terminal message to both opponents and total up the match.
    pub async fn finish(&mut self) -> Result<MatchSummary, MatchError> {
        for side in Side::BOTH {
            let opponent = self.opponent_mut(side);
            if let Err(e) = opponent.transport.send(HostMessage::MatchOver).await {
                return Err(opponent.blame(e));
            }
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            games: self.games_played,
            a: MatchLine::new(&self.a.name, &self.a.score),
            b: MatchLine::new(&self.b.name, &self.b.score),
            winner: match_leader(&self.a.score, &self.b.score),
        }
    }

    async fn collect_board(&mut self, side: Side) -> Result<Board, MatchError> {
        let validate = self.config.validate_boards;
        let opponent = self.opponent_mut(side);
        let received = request_board(opponent, validate).await;
        received.map_err(|e| opponent.blame(e))
    }

    /// Ask `side` for a shot and resolve it against the other side's board.
    async fn take_turn(&mut self, side: Side, game: &mut Game) -> Result<ShotOutcome, MatchError> {
        let (shooter, defender) = match side {
            Side::A => (&mut self.a, &mut self.b),
            Side::B => (&mut self.b, &mut self.a),
        };
        let resolved = request_shot(shooter, defender, game, side.other()).await;
        resolved.map_err(|e| shooter.blame(e))
    }
}

async fn request_board(opponent: &mut Opponent, validate: bool) -> Result<Board, MatchError> {
    opponent.transport.send(HostMessage::NewGame).await?;
    let board = opponent.transport.recv_board().await?;
    if validate {
        board.validate()?;
    }
    Ok(board)
}

async fn request_shot(
    shooter: &mut Opponent,
    defender: &mut Opponent,
    game: &mut Game,
    target: Side,
) -> Result<ShotOutcome, MatchError> {
    shooter.transport.send(HostMessage::ShotRequest).await?;
    resolve_shot(
        &mut *shooter.transport,
        &mut *defender.transport,
        &mut shooter.score,
        &mut game.trackers[target.index()],
        &game.boards[target.index()],
    )
    .await
}

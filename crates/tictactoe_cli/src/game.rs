//! The session at the terminal: welcome, games to the target score, goodbye.

use crate::config::GameConfig;
use crate::render;
use crate::terminal::{Console, capitalize};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{BufRead, Write};
use tictactoe_core::{
    Marker, MoveSelector, Outcome, RoundController, RoundError, RoundState, Score, Seats,
    random_computer_name,
};
use tracing::{info, instrument, warn};

/// What happened over a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Games played to the target score.
    pub games: u32,
    /// Winner of each game, in order.
    pub champions: Vec<Marker>,
    /// Score at the end of the last game.
    pub last_score: Score,
}

/// Runs a full session on `console`.
#[instrument(skip_all, fields(target = config.target_score(), seed = ?config.seed()))]
pub fn run<R: BufRead, W: Write>(
    config: &GameConfig,
    console: &mut Console<R, W>,
) -> Result<SessionSummary> {
    let mut rng = match config.seed() {
        Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let computer_name = random_computer_name(&mut rng);

    console.clear()?;
    console.say("Welcome to Tic Tac Toe!")?;
    console.say(format!("Today you're playing against {}!", computer_name))?;
    console.say("")?;

    let configured_name = config
        .human_name()
        .as_deref()
        .map(capitalize)
        .filter(|name| !name.is_empty());
    let human_name = match configured_name {
        Some(name) => name,
        None => console.ask_name()?,
    };
    let human_marker = match config.human_marker() {
        Some(marker) => *marker,
        None => console.ask_marker(&human_name)?,
    };

    let seats = Seats::new(human_name, human_marker, computer_name);
    let first_mover = if *config.computer_first() {
        human_marker.opponent()
    } else {
        human_marker
    };
    info!(%human_marker, %first_mover, computer = computer_name, "Seats assigned");

    let mut controller = RoundController::new(seats, first_mover, MoveSelector::new(rng));
    let mut summary = SessionSummary {
        games: 0,
        champions: Vec::new(),
        last_score: Score::new(),
    };

    loop {
        let (champion, score) = play_game(&mut controller, console, *config.target_score())?;
        summary.games += 1;
        summary.champions.push(champion);
        summary.last_score = score;

        if !console.ask_play_again()? {
            break;
        }
        console.say("Let's play again!")?;
        console.say("")?;
    }

    let name = controller.seats().human().name().clone();
    console.say(format!("Thanks for playing Tic Tac Toe, {}!", name))?;
    Ok(summary)
}

/// Plays rounds until one marker reaches `target`.
#[instrument(skip(controller, console))]
fn play_game<R: BufRead, W: Write>(
    controller: &mut RoundController,
    console: &mut Console<R, W>,
    target: u32,
) -> Result<(Marker, Score)> {
    let mut score = Score::new();
    loop {
        let outcome = play_round(controller, console)?;
        score = score.record(outcome);

        console.clear()?;
        render::draw_board(console.out(), controller.board(), controller.seats())?;
        console.say(render::round_result(outcome, controller.seats()))?;
        render::draw_scores(console.out(), &score, controller.seats())?;

        if let Some(champion) = score.leader_at(target) {
            info!(%champion, x = score.of(Marker::X), o = score.of(Marker::O), "Game over");
            console.say(render::game_result(champion, controller.seats()))?;
            return Ok((champion, score));
        }
    }
}

/// Plays one round, redrawing the board before every move.
fn play_round<R: BufRead, W: Write>(
    controller: &mut RoundController,
    console: &mut Console<R, W>,
) -> Result<Outcome> {
    controller.reset();
    loop {
        console.clear()?;
        render::draw_board(console.out(), controller.board(), controller.seats())?;

        match controller.step(console) {
            Ok(RoundState::RoundOver(outcome)) => return Ok(outcome),
            Ok(RoundState::AwaitingMove(_)) => {}
            Err(RoundError::InvalidMove(err)) => {
                warn!(%err, "Move rejected");
                console.say(err.to_string())?;
            }
            Err(err) => return Err(err).context("Round aborted"),
        }
    }
}

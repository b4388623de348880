use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Color;
use lib::config::Config;
use lib::vote::{Game, UserId, Verdict};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::num::NonZeroUsize;
use tracing::{info, instrument};

/// Simulates a game between two teams of voters that pick moves at random.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Simulate {
    /// How many voters on each team.
    #[clap(short = 'n', long, default_value = "5")]
    voters: NonZeroUsize,

    /// The probability that a voter casts a vote on their turn.
    #[clap(short, long, default_value = "0.8", value_parser = parse_turnout)]
    turnout: f64,

    /// Game settings, only the seed is used.
    #[clap(short, long, default_value_t)]
    config: Config,
}

impl Simulate {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let (sans, verdict) = simulate(seed, self.voters.get(), self.turnout)?;

        let mut record = String::new();
        for (i, san) in sans.iter().enumerate() {
            if i % 2 == 0 {
                record += &format!("{}. ", i / 2 + 1);
            }

            record += &format!("{san} ");
        }

        println!("seed: {seed}\n{}\n{verdict}", record.trim_end());

        Ok(())
    }
}

/// Parses a probability, which must lie in `[0, 1]`.
fn parse_turnout(s: &str) -> Result<f64, String> {
    let p: f64 = s.trim().parse().map_err(|e| format!("{e}"))?;
    if (0. ..=1.).contains(&p) {
        Ok(p)
    } else {
        Err(format!("`{s}` is not a probability between 0 and 1"))
    }
}

/// Plays a whole game from the initial position, returning the moves played and the verdict.
fn simulate(seed: u64, voters: usize, turnout: f64) -> Result<(Vec<String>, Verdict), Anyhow> {
    let mut game = Game::new(StdRng::seed_from_u64(seed));
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));

    for team in [Color::White, Color::Black] {
        for i in 0..voters {
            game.join(UserId::from(format!("{team}{i}")), team);
        }
    }

    let mut sans = Vec::new();

    let verdict = loop {
        let moves = game.legal_moves();
        let mut members: Vec<_> = game.roster(game.turn()).members().cloned().collect();
        members.sort();

        for user in &members {
            if rng.gen_bool(turnout) {
                if let Some((m, _)) = moves.choose(&mut rng) {
                    game.propose(user, &m.to_string())?;
                }
            }
        }

        let verdict = game.resolve();

        if let Some((_, san)) = game.last_move() {
            sans.push(san.to_string());
        }

        info!(plies = sans.len(), tally = %game.standings(1));

        if let Some(v) = verdict {
            break v;
        }
    };

    Ok((sans, verdict))
}

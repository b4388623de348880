use crate::command::Command;
use crate::io::{Io, Terminal};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Position;
use lib::config::Config;
use lib::schedule::Scheduler;
use lib::vote::{Game, Lobby, Verdict};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::io::ErrorKind;
use tokio::io::{stdin, stdout};
use tokio::select;
use tracing::{info, instrument, warn};

/// Play a vote chess game from the console.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Game settings, e.g. `(period: "1h", standings: 5, seed: Some(42))`.
    #[clap(short, long, default_value_t)]
    config: Config,

    /// Start from this position in FEN instead of the initial one.
    #[clap(long)]
    fen: Option<Position>,
}

impl Play {
    #[instrument(level = "trace", skip(self), err, fields(config = %self.config))]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let lobby = Lobby::from(Game::with_position(self.fen.unwrap_or_default(), rng));
        let scheduler = Scheduler::new(lobby.clone(), self.config.period);
        let io = Terminal::new(stdout(), stdin());

        Console::new(io, lobby, scheduler, self.config.standings)
            .run()
            .await
    }
}

enum Event {
    Resolved(Option<Verdict>),
    Line(std::io::Result<String>),
}

/// Drives a [`Lobby`] from commands typed into an [`Io`].
struct Console<T, R> {
    io: T,
    lobby: Lobby<R>,
    scheduler: Scheduler<Lobby<R>>,
    standings: usize,
}

impl<T: Io, R: Rng> Console<T, R> {
    fn new(io: T, lobby: Lobby<R>, scheduler: Scheduler<Lobby<R>>, standings: usize) -> Self {
        Console {
            io,
            lobby,
            scheduler,
            standings,
        }
    }

    async fn run(&mut self) -> Result<(), Anyhow> {
        let greeting = format!("{}\ntype `help` for a list of commands", self.game());
        self.io.send(&greeting).await?;
        self.io.flush().await?;

        loop {
            let event = select! {
                v = self.scheduler.tick() => Event::Resolved(v),
                line = self.io.recv() => Event::Line(line),
            };

            let reply = match event {
                Event::Resolved(v) => self.resolved(v),
                Event::Line(Err(e)) if e.kind() == ErrorKind::UnexpectedEof => break Ok(()),
                Event::Line(Err(e)) => break Err(e.into()),
                Event::Line(Ok(line)) => match line.parse() {
                    Ok(Command::Quit) => break Ok(()),
                    Ok(cmd) => self.execute(cmd),
                    Err(e) => {
                        warn!("{}", e);
                        e.to_string()
                    }
                },
            };

            self.io.send(&reply).await?;
            self.io.flush().await?;
        }
    }

    fn game(&self) -> String {
        self.lobby.snapshot(self.standings).to_string()
    }

    fn resolved(&self, verdict: Option<Verdict>) -> String {
        if let Some(v) = verdict {
            info!(verdict = %v);
        }

        format!("turn resolved\n{}", self.game())
    }

    #[instrument(level = "debug", skip(self))]
    fn execute(&self, cmd: Command) -> String {
        match cmd {
            Command::Join(user, team) => {
                if self.lobby.join(user.clone(), team) {
                    format!("{user} switched to the {team} team")
                } else {
                    format!("{user} joined the {team} team")
                }
            }

            Command::Team(user) => match self.lobby.team(&user) {
                Some(team) => format!("{user} is on the {team} team"),
                None => format!("{user} has not joined a team"),
            },

            Command::Move(user, text) => {
                match self.lobby.propose_on_turn(&user, &text) {
                    Ok(m) => format!("{user} voted for {m}\n{}", self.lobby.standings(self.standings)),
                    Err(e) => {
                        warn!(%user, "{}", e);
                        e.to_string()
                    }
                }
            }

            Command::Moves => {
                let moves = self.lobby.legal_moves();
                if moves.is_empty() {
                    "no legal moves".to_string()
                } else {
                    let sans: Vec<_> = moves.iter().map(|(_, san)| san.to_string()).collect();
                    format!("legal moves: {}", sans.join(" "))
                }
            }

            Command::Preview(text) => match self.lobby.preview(&text) {
                Ok(pos) => format!("after {text}: {pos}"),
                Err(e) => e.to_string(),
            },

            Command::Game => self.game(),
            Command::Votes => self.lobby.standings(self.standings).to_string(),
            Command::Next => self.resolved(self.lobby.resolve()),

            Command::Reset => {
                self.lobby.reset();
                format!("new game\n{}", self.game())
            }

            Command::Help => Command::USAGE.to_string(),
            Command::Quit => String::new(),
        }
    }
}

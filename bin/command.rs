use derive_more::{Display, Error};
use lib::{chess::Color, vote::UserId};
use std::str::FromStr;

/// A line typed into the console.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// `join <user> <white|black>`
    Join(UserId, Color),
    /// `team <user>`
    Team(UserId),
    /// `move <user> <move>`
    Move(UserId, String),
    /// `moves`
    Moves,
    /// `preview <move>`
    Preview(String),
    /// `game`
    Game,
    /// `votes`
    Votes,
    /// `next`
    Next,
    /// `reset`
    Reset,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

impl Command {
    pub const USAGE: &'static str = "\
join <user> <white|black>  join a team, leaving the other one
team <user>                show the team of a user
move <user> <move>         vote for a move, e.g. `e4` or `e2e4`
moves                      list the legal moves
preview <move>             show the position after a move
game                       show the state of the game
votes                      show the leading votes
next                       resolve the current turn now
reset                      start a new game keeping both teams
help                       show this message
quit                       exit";
}

/// The reason why parsing [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseCommandError {
    #[display(fmt = "unknown command `{}`, type `help` for a list of commands", _0)]
    Unknown(#[error(not(source))] String),

    #[display(fmt = "missing argument <{}>", _0)]
    MissingArgument(#[error(not(source))] &'static str),

    #[display(fmt = "unexpected argument `{}`", _0)]
    UnexpectedArgument(#[error(not(source))] String),

    #[display(fmt = "`{}` is not a team, expected `white` or `black`", _0)]
    InvalidTeam(#[error(not(source))] String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseCommandError::*;

        let mut args = s.split_whitespace();
        let mut arg = |name| args.next().ok_or(MissingArgument(name));

        let cmd = match arg("command")?.to_lowercase().as_str() {
            "join" => {
                let user: UserId = arg("user")?.into();
                let team = arg("team")?;
                Command::Join(user, team.parse().map_err(|_| InvalidTeam(team.into()))?)
            }

            "team" => Command::Team(arg("user")?.into()),
            "move" => Command::Move(arg("user")?.into(), arg("move")?.into()),
            "moves" => Command::Moves,
            "preview" => Command::Preview(arg("move")?.into()),
            "game" => Command::Game,
            "votes" => Command::Votes,
            "next" => Command::Next,
            "reset" => Command::Reset,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            unknown => return Err(Unknown(unknown.into())),
        };

        match args.next() {
            Some(extra) => Err(UnexpectedArgument(extra.into())),
            None => Ok(cmd),
        }
    }
}

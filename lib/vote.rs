mod error;
mod game;
mod lobby;
mod proposal;
mod roster;
mod snapshot;
mod tally;
mod user;
mod verdict;

pub use error::*;
pub use game::*;
pub use lobby::*;
pub use proposal::*;
pub use roster::*;
pub use snapshot::*;
pub use tally::*;
pub use user::*;
pub use verdict::*;

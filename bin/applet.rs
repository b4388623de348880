use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod play;
mod simulate;

#[derive(From, Subcommand)]
pub enum Applet {
    Play(play::Play),
    Simulate(simulate::Simulate),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub async fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => Ok(a.execute().await?),
            Applet::Simulate(a) => Ok(a.execute().await?),
        }
    }
}

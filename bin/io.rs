use async_trait::async_trait;
use std::io;

mod terminal;

pub use terminal::*;

/// Trait for line oriented front ends.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait Io {
    /// Receive the next non-blank line.
    async fn recv(&mut self) -> io::Result<String>;

    /// Send a message, which may span multiple lines.
    async fn send(&mut self, msg: &str) -> io::Result<()>;

    /// Flush the internal buffers.
    async fn flush(&mut self) -> io::Result<()>;
}

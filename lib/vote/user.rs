use derive_more::{Display, From};

/// Identifies a member of the community, as assigned by the transport.
#[derive(Debug, Display, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", _0)]
pub struct UserId(String);

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(id.to_string())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

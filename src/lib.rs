mod error;
mod evaluate;
mod matcher;
mod parse;
#[cfg(feature = "binary-cache")]
mod serial;
mod types;

pub use error::RobotsError;
#[cfg(feature = "binary-cache")]
pub use serial::{DeserializeError, SerializeError};
pub use matcher::{matches_pattern, LongestMatchStrategy, MatchStrategy, NO_MATCH_PRIORITY};
pub use parse::{parse, scan, GroupAssembler, ParseHandler};
pub use types::{DirectiveKind, MatchTier, QueryReport, Robots, Rule, RuleGroup, WinningMatch};

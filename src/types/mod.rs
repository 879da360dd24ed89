mod group;
mod report;
mod robots;
mod rule;

pub use group::RuleGroup;
pub use report::{MatchTier, QueryReport, WinningMatch};
pub use robots::Robots;
pub use rule::{DirectiveKind, Rule};

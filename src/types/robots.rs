use std::fmt;

use crate::error::RobotsError;
use crate::matcher::{LongestMatchStrategy, MatchStrategy};

use super::group::RuleGroup;
use super::report::QueryReport;
use super::rule::DirectiveKind;

/// A parsed robots.txt ruleset, ready to answer access queries.
///
/// Construction fully completes before any query runs and no mutation
/// happens afterwards, so a `Robots` can live behind `Arc` and serve
/// arbitrarily many concurrent queries without locking.
///
/// # Example
///
/// ```
/// use robotrules::Robots;
///
/// let robots = Robots::parse("user-agent: FooBot\ndisallow: /private/\n");
/// assert!(!robots.one_agent_allowed_by_robots("FooBot", "/private/x"));
/// assert!(robots.one_agent_allowed_by_robots("FooBot", "/public"));
/// ```
pub struct Robots {
    pub(crate) groups: Vec<RuleGroup>,
    strategy: Box<dyn MatchStrategy + Send + Sync>,
}

impl Robots {
    /// Parse a robots.txt body with the default
    /// [`LongestMatchStrategy`]. Never fails; malformed lines are
    /// dropped during scanning.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::parse_with_strategy(input, LongestMatchStrategy)
    }

    /// Parse with a custom pattern-matching strategy. The strategy only
    /// replaces pattern scoring; group selection and priority resolution
    /// are unchanged.
    #[must_use]
    pub fn parse_with_strategy(
        input: &str,
        strategy: impl MatchStrategy + Send + Sync + 'static,
    ) -> Self {
        Self {
            groups: crate::parse::parse(input),
            strategy: Box::new(strategy),
        }
    }

    /// Read a robots.txt file and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`RobotsError::Io`] if the file cannot be read. Parsing
    /// itself never fails.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, RobotsError> {
        let input = std::fs::read_to_string(path)?;
        Ok(Self::parse(&input))
    }

    /// Whether the rules applicable to any of the candidate agent names
    /// permit `path`.
    ///
    /// The candidates are alternate identifiers for the same requester
    /// (say, a full product name and its short token); each group is
    /// classified once against the whole list, not once per candidate.
    #[must_use]
    pub fn allowed_by_robots(&self, agents: &[&str], path: &str) -> bool {
        self.query(agents, path).allowed()
    }

    /// Convenience wrapper for a single agent name.
    #[must_use]
    pub fn one_agent_allowed_by_robots(&self, agent: &str, path: &str) -> bool {
        self.allowed_by_robots(&[agent], path)
    }

    /// Like [`allowed_by_robots()`](Self::allowed_by_robots) but also
    /// reports which directive decided the query.
    pub fn query(&self, agents: &[&str], path: &str) -> QueryReport {
        crate::evaluate::evaluate(&self.groups, self.strategy.as_ref(), agents, path)
    }

    /// Sitemap URLs declared anywhere in the file, in source order.
    pub fn sitemaps(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|group| &group.rules)
            .filter(|rule| rule.kind == DirectiveKind::Sitemap)
            .map(|rule| rule.value.as_str())
    }

    /// The parsed rule groups, in source order.
    #[must_use]
    pub fn groups(&self) -> &[RuleGroup] {
        &self.groups
    }
}

impl fmt::Debug for Robots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Robots")
            .field("groups", &self.groups)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Robots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules: usize = self.groups.iter().map(|g| g.rules.len()).sum();
        write!(f, "Robots({} groups, {} rules)", self.groups.len(), rules)
    }
}

#[cfg(feature = "binary-cache")]
impl Robots {
    /// Serialize the parsed ruleset to a byte vector.
    ///
    /// The optional `source_text` is hashed (BLAKE3) and embedded in the
    /// payload metadata so callers can detect when a refetched file
    /// differs from the one a cache entry was built from.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError`](crate::serial::SerializeError) if encoding fails.
    pub fn to_bytes(
        &self,
        source_text: Option<&str>,
    ) -> Result<Vec<u8>, crate::serial::SerializeError> {
        crate::serial::encode(self, source_text)
    }

    /// Deserialize a ruleset previously produced by
    /// [`to_bytes`](Self::to_bytes). The result uses the default
    /// matching strategy.
    ///
    /// # Errors
    ///
    /// Returns [`DeserializeError`](crate::serial::DeserializeError) on
    /// format, integrity, or validation failure.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, crate::serial::DeserializeError> {
        crate::serial::decode(bytes)
    }

    /// Serialize the ruleset and write it to a file.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError`](crate::serial::SerializeError) on
    /// encoding or I/O failure.
    pub fn to_binary_file(
        &self,
        path: impl AsRef<std::path::Path>,
        source_text: Option<&str>,
    ) -> Result<(), crate::serial::SerializeError> {
        let bytes = self.to_bytes(source_text)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read a file and deserialize the ruleset it contains.
    ///
    /// # Errors
    ///
    /// Returns [`DeserializeError`](crate::serial::DeserializeError) on
    /// I/O, format, integrity, or validation failure.
    pub fn from_binary_file(
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, crate::serial::DeserializeError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub(crate) fn from_groups(groups: Vec<RuleGroup>) -> Self {
        Self {
            groups,
            strategy: Box::new(LongestMatchStrategy),
        }
    }
}

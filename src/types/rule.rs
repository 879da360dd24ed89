use std::fmt;

/// The directive kinds the engine understands.
///
/// Unrecognized directives are dropped during parsing and never reach the
/// rule model. `Sitemap` rules are carried for discovery via
/// [`Robots::sitemaps()`](super::Robots::sitemaps) but are ignored by the
/// priority resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Allow,
    Disallow,
    Sitemap,
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DirectiveKind::Allow => "allow",
            DirectiveKind::Disallow => "disallow",
            DirectiveKind::Sitemap => "sitemap",
        };
        f.write_str(name)
    }
}

/// A single directive line, owned by its containing [`RuleGroup`](super::RuleGroup).
///
/// For `Allow`/`Disallow` the value is a normalized path pattern; for
/// `Sitemap` it is the raw URL. `line` is the 1-based source line the
/// directive came from, preserved so query diagnostics can point back at
/// the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: DirectiveKind,
    pub value: String,
    pub line: usize,
}

impl Rule {
    pub(crate) fn new(kind: DirectiveKind, value: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display() {
        assert_eq!(DirectiveKind::Allow.to_string(), "allow");
        assert_eq!(DirectiveKind::Disallow.to_string(), "disallow");
        assert_eq!(DirectiveKind::Sitemap.to_string(), "sitemap");
    }

    #[test]
    fn rule_construction() {
        let rule = Rule::new(DirectiveKind::Disallow, "/private/", 3);
        assert_eq!(rule.kind, DirectiveKind::Disallow);
        assert_eq!(rule.value, "/private/");
        assert_eq!(rule.line, 3);
    }
}

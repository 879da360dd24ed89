mod grammar;
mod parser;

pub use parser::{scan, GroupAssembler, ParseHandler};

use crate::types::RuleGroup;

/// Parse a robots.txt body into rule groups.
///
/// Parsing never fails: unparseable lines and unknown directives are
/// dropped, matching how crawlers treat real-world files.
#[must_use]
pub fn parse(input: &str) -> Vec<RuleGroup> {
    let mut assembler = GroupAssembler::new();
    scan(input, &mut assembler);
    assembler.into_groups()
}

use crate::rules::builtin::{builtin_rules, MESSAGE_PATTERN};
use crate::rules::model::{Rule, RuleCategory};
use regex::Regex;

pub struct CompiledRule {
    pub rule: Rule,
    pub regex: Regex,
}

impl CompiledRule {
    pub fn id(&self) -> &str {
        &self.rule.id
    }

    pub fn category(&self) -> RuleCategory {
        self.rule.category
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// A rule that was left out of the catalog because its pattern did not compile.
#[derive(Debug, Clone)]
pub struct SkippedRule {
    pub id: String,
    pub reason: String,
}

/// Ordered, immutable set of compiled rules plus the message extraction rule.
///
/// Construction never fails. A rule whose pattern does not compile is left
/// out and recorded in [`PatternCatalog::skipped`]; if nothing compiles the
/// catalog simply matches no line.
pub struct PatternCatalog {
    rules: Vec<CompiledRule>,
    skipped: Vec<SkippedRule>,
    message: Regex,
}

impl PatternCatalog {
    pub fn builtin() -> Self {
        Self::from_rules(builtin_rules())
    }

    /// Built-in rules followed by `extra`.
    pub fn with_extra_rules(extra: Vec<Rule>) -> Self {
        let mut rules = builtin_rules();
        rules.extend(extra);
        Self::from_rules(rules)
    }

    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        let mut compiled_rules = Vec::new();
        let mut skipped = Vec::new();

        // 编译失败的规则直接跳过
        for rule in rules {
            match Regex::new(&rule.pattern) {
                Ok(regex) => compiled_rules.push(CompiledRule { rule, regex }),
                Err(e) => {
                    tracing::debug!("Skipping rule {}: {}", rule.id, e);
                    skipped.push(SkippedRule {
                        id: rule.id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Self {
            rules: compiled_rules,
            skipped,
            message: message_regex(),
        }
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn skipped(&self) -> &[SkippedRule] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule matching `line`, in catalog order.
    pub fn first_match(&self, line: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|compiled| compiled.is_match(line))
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.first_match(line).is_some()
    }

    /// Interior of the first double-quoted literal on `line`.
    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.message
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn message_regex() -> Regex {
    Regex::new(MESSAGE_PATTERN).expect("message pattern is a valid constant")
}

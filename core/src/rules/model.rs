use serde::{Deserialize, Serialize};
use std::fmt;

/// 规则定义：一条作用于单行源码的匹配表达式
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Rule {
    pub id: String,
    pub pattern: String,
    #[serde(default)]
    pub category: RuleCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Rule {
    pub fn new(id: impl Into<String>, category: RuleCategory, pattern: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pattern: pattern.into(),
            category,
            description: None,
        }
    }
}

/// The shape of error-bearing line a rule recognizes.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Leveled logger calls: `log.Errorf`, `klog.Warning`, `glog.Error`, ...
    Logging,
    /// `fmt.Errorf`, `errors.New`, `errors.Wrap[f]`
    ErrorConstruction,
    /// `return` of an error construction
    Return,
    /// `if ... { return ... }` on one line
    Conditional,
    /// `panic("...")`, `log.Panic[f]`
    Abort,
    /// `Event[f]` / `Recorder.Event[f]`
    Event,
    /// `http.Error`
    Http,
    /// `field.Error`, `apierrors.New*`
    Domain,
    /// User rules that do not state a category
    #[default]
    Custom,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logging => "logging",
            Self::ErrorConstruction => "error_construction",
            Self::Return => "return",
            Self::Conditional => "conditional",
            Self::Abort => "abort",
            Self::Event => "event",
            Self::Http => "http",
            Self::Domain => "domain",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A YAML rule file holding several rules.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RuleSet {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    pub rules: Vec<Rule>,
}

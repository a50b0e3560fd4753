//! Built-in rules describing an error-bearing line of Go-style source.
//!
//! Every pattern requires at least one double-quoted literal in the call's
//! argument list, so bare `log.Error(err)` style calls never classify.

use super::model::{Rule, RuleCategory};

use RuleCategory::*;

/// (id, category, pattern), evaluated in this order.
pub const BUILTIN_RULES: &[(&str, RuleCategory, &str)] = &[
    // 标准日志库
    ("log-error", Logging, r#"log\.Errorf?\([^)]*"[^"]*"[^)]*\)"#),
    ("log-warn", Logging, r#"log\.Warnf?\([^)]*"[^"]*"[^)]*\)"#),
    ("log-fatal", Logging, r#"log\.Fatalf?\([^)]*"[^"]*"[^)]*\)"#),
    // klog
    ("klog-error", Logging, r#"klog\.Errorf?\([^)]*"[^"]*"[^)]*\)"#),
    ("klog-warning", Logging, r#"klog\.Warningf?\([^)]*"[^"]*"[^)]*\)"#),
    ("klog-fatal", Logging, r#"klog\.Fatalf?\([^)]*"[^"]*"[^)]*\)"#),
    // 只认字符串字面量内部的 error，跳过前面成对的字面量
    ("klog-info-error", Logging, r#"klog\.Infof?\((?:[^)"]*"[^"]*")*?[^)"]*"[^"]*[Ee]rror[^"]*"[^)]*\)"#),
    // 错误构造
    ("fmt-errorf", ErrorConstruction, r#"fmt\.Errorf\([^)]*"[^"]*"[^)]*\)"#),
    ("errors-new", ErrorConstruction, r#"errors\.New\([^)]*"[^"]*"[^)]*\)"#),
    ("errors-wrap", ErrorConstruction, r#"errors\.Wrapf?\([^)]*"[^"]*"[^)]*\)"#),
    ("fmt-errorf-wrap-verb", ErrorConstruction, r#"fmt\.Errorf\([^)]*"[^"]*"[^)]*%w[^)]*\)"#),
    ("errors-wrap-plain", ErrorConstruction, r#"errors\.Wrap\([^)]*"[^"]*"[^)]*\)"#),
    // return
    ("return-fmt-errorf", Return, r#"return\s+fmt\.Errorf\([^)]*"[^"]*"[^)]*\)"#),
    ("return-errors-new", Return, r#"return\s+errors\.New\([^)]*"[^"]*"[^)]*\)"#),
    ("return-errors-wrap", Return, r#"return\s+errors\.Wrapf?\([^)]*"[^"]*"[^)]*\)"#),
    // 自定义日志器
    ("logger-error", Logging, r#"logger\.Errorf?\([^)]*"[^"]*"[^)]*\)"#),
    ("glog-error", Logging, r#"glog\.Errorf?\([^)]*"[^"]*"[^)]*\)"#),
    ("glog-warning", Logging, r#"glog\.Warningf?\([^)]*"[^"]*"[^)]*\)"#),
    // panic
    ("panic", Abort, r#"panic\([^)]*"[^"]*"[^)]*\)"#),
    ("log-panic", Abort, r#"log\.Panicf?\([^)]*"[^"]*"[^)]*\)"#),
    // 事件记录
    ("event", Event, r#"Eventf?\([^)]*"[^"]*"[^"]*"[^"]*"[^)]*\)"#),
    ("recorder-event", Event, r#"Recorder\.Eventf?\([^)]*"[^"]*"[^"]*"[^"]*"[^)]*\)"#),
    // HTTP
    ("http-error", Http, r#"http\.Error\([^)]*"[^"]*"[^)]*\)"#),
    // Kubernetes
    ("field-error", Domain, r#"field\.Error\([^)]*"[^"]*"[^)]*\)"#),
    ("apierrors-new", Domain, r#"apierrors\.New[^)]*\([^)]*"[^"]*"[^)]*\)"#),
    // 条件返回
    ("if-return-fmt-errorf", Conditional, r#"if\s+.*\{\s*return\s+fmt\.Errorf\([^)]*"[^"]*"[^)]*\)"#),
    ("if-return-errors-new", Conditional, r#"if\s+.*\{\s*return\s+errors\.New\([^)]*"[^"]*"[^)]*\)"#),
];

/// Captures the interior of the first double-quoted literal on a line.
pub const MESSAGE_PATTERN: &str = r#""([^"]*)""#;

pub fn builtin_rules() -> Vec<Rule> {
    BUILTIN_RULES
        .iter()
        .map(|(id, category, pattern)| Rule::new(*id, *category, *pattern))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_ids_are_unique() {
        let ids: HashSet<_> = BUILTIN_RULES.iter().map(|(id, _, _)| *id).collect();
        assert_eq!(ids.len(), BUILTIN_RULES.len());
    }

    #[test]
    fn every_builtin_pattern_compiles() {
        for (id, _, pattern) in BUILTIN_RULES {
            assert!(regex::Regex::new(pattern).is_ok(), "rule {id} does not compile");
        }
    }

    #[test]
    fn every_category_except_custom_is_covered() {
        let categories: HashSet<_> = BUILTIN_RULES.iter().map(|(_, c, _)| *c).collect();
        for category in [
            RuleCategory::Logging,
            RuleCategory::ErrorConstruction,
            RuleCategory::Return,
            RuleCategory::Conditional,
            RuleCategory::Abort,
            RuleCategory::Event,
            RuleCategory::Http,
            RuleCategory::Domain,
        ] {
            assert!(categories.contains(&category), "{category} has no rule");
        }
        assert!(!categories.contains(&RuleCategory::Custom));
    }
}

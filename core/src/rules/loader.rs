use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{CoreError, Result};
use crate::rules::model::{Rule, RuleSet};

/// Load user rules from every `*.yaml`/`*.yml` file under `path`.
///
/// A file may hold a [`RuleSet`] or a single [`Rule`]. Files that parse as
/// neither are skipped with a warning. Patterns are not compiled here; the
/// catalog decides which rules survive.
pub fn load_rules_from_dir<P: AsRef<Path>>(path: P) -> Result<Vec<Rule>> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(CoreError::Rules(format!(
            "rules directory not found: {}",
            path.display()
        )));
    }

    let mut rules = Vec::new();

    let mut entries = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|e| CoreError::Rules(e.to_string()))?;
        if entry.file_type().is_file() && is_yaml(entry.path()) {
            entries.push(entry.into_path());
        }
    }

    for file in entries {
        let content = fs::read_to_string(&file).map_err(|source| CoreError::Io {
            path: file.clone(),
            source,
        })?;

        // 先尝试规则集，再尝试单条规则
        if let Ok(rule_set) = serde_yaml::from_str::<RuleSet>(&content) {
            tracing::debug!(
                "Loaded rule set {} ({} rules) from {}",
                rule_set.name,
                rule_set.rules.len(),
                file.display()
            );
            rules.extend(rule_set.rules);
        } else if let Ok(rule) = serde_yaml::from_str::<Rule>(&content) {
            tracing::debug!("Loaded rule {} from {}", rule.id, file.display());
            rules.push(rule);
        } else {
            tracing::warn!("Failed to parse rule file: {}", file.display());
        }
    }

    Ok(rules)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext == "yaml" || ext == "yml")
}

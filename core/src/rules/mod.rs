// Rules module - 规则目录
// 内置规则、用户规则加载与编译后的规则目录

pub mod builtin;
pub mod catalog;
pub mod loader;
pub mod model;

pub use catalog::{CompiledRule, PatternCatalog, SkippedRule};
pub use model::{Rule, RuleCategory, RuleSet};

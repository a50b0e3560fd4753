use errscan_core::{ErrorSearcher, PatternCatalog, Rule, RuleCategory};

const CONTROLLER_GO: &str = r#"package controller

import (
	"fmt"

	"k8s.io/klog/v2"
)

func (c *Controller) syncHandler(key string) error {
	namespace, name, err := cache.SplitMetaNamespaceKey(key)
	if err != nil {
		utilruntime.HandleError(fmt.Errorf("invalid resource key: %s", key))
		return nil
	}

	foo, err := c.foosLister.Foos(namespace).Get(name)
	if err != nil {
		klog.Warningf("foo '%s' in work queue no longer exists", key)
		return err
	}

	if foo.Spec.DeploymentName == "" {
		klog.Errorf("%s: deployment name must be specified", key)
		return nil
	}

	if !metav1.IsControlledBy(deployment, foo) {
		msg := fmt.Sprintf(MessageResourceExists, deployment.Name)
		c.recorder.Event(foo, corev1.EventTypeWarning, ErrResourceExists, msg)
		return fmt.Errorf("%s", msg)
	}

	if err != nil { return errors.New("update failed") }

	panic(err)
}
"#;

fn searcher() -> ErrorSearcher {
    ErrorSearcher::new()
}

#[test]
fn controller_fixture_yields_expected_messages() {
    let records = searcher().search(CONTROLLER_GO, "pkg/controller/controller.go");
    let found: Vec<_> = records
        .iter()
        .map(|r| (r.line_number, r.message.as_str()))
        .collect();

    assert_eq!(
        found,
        vec![
            (12, "invalid resource key: %s"),
            (18, "foo '%s' in work queue no longer exists"),
            (23, "%s: deployment name must be specified"),
            (30, "%s"),
            (33, "update failed"),
        ]
    );
    assert!(records
        .iter()
        .all(|r| r.file_path == "pkg/controller/controller.go"));
}

#[test]
fn record_count_never_exceeds_non_blank_lines() {
    let inputs = [
        CONTROLLER_GO,
        "",
        "\n\n\n",
        "log.Error(\"a\")\nlog.Error(\"b\")\n\n   \t\nlog.Error(\"c\")",
        "log.Error(\"a\"); log.Error(\"b\")",
    ];

    for input in inputs {
        let non_blank = input.split('\n').filter(|l| !l.trim().is_empty()).count();
        let records = searcher().search(input, "x.go");
        assert!(records.len() <= non_blank, "input: {input:?}");
    }
}

#[test]
fn whitespace_only_lines_never_produce_records() {
    let input = " \t \n\r\n\u{00a0}\u{2003}\n";
    assert!(searcher().search(input, "x.go").is_empty());
}

#[test]
fn line_numbers_point_at_source_lines() {
    let lines: Vec<&str> = CONTROLLER_GO.split('\n').collect();
    let records = searcher().search(CONTROLLER_GO, "c.go");

    assert!(!records.is_empty());
    for record in &records {
        assert!(record.line_number >= 1 && record.line_number <= lines.len());
        assert_eq!(lines[record.line_number - 1].trim(), record.full_line);
        assert!(record.full_line.contains(&record.message));
    }
    assert!(records.windows(2).all(|w| w[0].line_number < w[1].line_number));
}

#[test]
fn search_is_idempotent() {
    let s = searcher();
    let first = s.search(CONTROLLER_GO, "c.go");
    let second = s.search(CONTROLLER_GO, "c.go");
    assert_eq!(first, second);
}

#[test]
fn one_record_per_line_even_when_many_rules_match() {
    // return + fmt.Errorf + %w + if-return all match
    let line = r#"if err := f(); err != nil { return fmt.Errorf("sync %s: %w", key, err) }"#;
    let records = searcher().search(line, "x.go");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "sync %s: %w");
}

#[test]
fn catalog_without_rules_matches_nothing() {
    let s = ErrorSearcher::with_catalog(PatternCatalog::from_rules(vec![Rule::new(
        "broken",
        RuleCategory::Custom,
        "log\\.Error(",
    )]));

    assert_eq!(s.catalog().skipped().len(), 1);
    assert!(s.search(CONTROLLER_GO, "c.go").is_empty());
}

#[test]
fn shared_searcher_across_threads() {
    let s = std::sync::Arc::new(searcher());
    let expected = s.search(CONTROLLER_GO, "c.go");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let s = std::sync::Arc::clone(&s);
            std::thread::spawn(move || s.search(CONTROLLER_GO, "c.go"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

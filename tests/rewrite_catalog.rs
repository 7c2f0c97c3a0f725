use relabel::document::Document;
use relabel::document_util;
use relabel::rewrite::rewrite;
use relabel::rules::RuleSet;
use relabel::rules_util;

fn rewrite_str(json_str: &str, rules: &RuleSet) -> Document {
    let mut document = document_util::from_json_str(json_str).unwrap();
    rewrite(&mut document, rules).unwrap();
    document
}

#[test]
fn sequence_scenario() {
    let input = r#"[{"id": 1, "path": ["Computer Science and Engg", "AI"]}, {"id": 2, "path": ["Math"]}, {"id": 3}]"#;
    let expected = r#"[{"id": 1, "path": ["Computer Science", "AI"]}, {"id": 2, "path": ["Math"]}, {"id": 3}]"#;

    let document = rewrite_str(input, &RuleSet::default());

    assert_eq!(document, document_util::from_json_str(expected).unwrap());
}

#[test]
fn single_record_scenario() {
    let input = r#"{"path": ["Computer Science and Engg"]}"#;
    let expected = r#"{"path": ["Computer Science"]}"#;

    let document = rewrite_str(input, &RuleSet::default());

    assert_eq!(document, document_util::from_json_str(expected).unwrap());
}

#[test]
fn shape_and_order_preserved() {
    let input = r#"[{"id": 1}, {"id": 2, "path": ["Computer Science and Engg"]}, {"id": 3}]"#;

    let document = rewrite_str(input, &RuleSet::default());

    let records = match document {
        Document::Many(records) => records,
        Document::One(_) => panic!("expected a sequence"),
    };
    assert_eq!(records.len(), 3);
    for (index, record) in records.iter().enumerate() {
        assert_eq!(record["id"], serde_json::json!(index + 1));
    }
}

#[test]
fn idempotence() {
    let rules = RuleSet::default();
    let input = r#"[{"id": 1, "path": ["Computer Science and Engg", "AI"]}, {"id": 2, "path": ["Math"]}]"#;

    let mut once = document_util::from_json_str(input).unwrap();
    rewrite(&mut once, &rules).unwrap();

    let mut twice = once.clone();
    let stats = rewrite(&mut twice, &rules).unwrap();

    assert_eq!(twice, once);
    assert_eq!(stats.labels_replaced, 0);
}

#[test]
fn unrelated_fields_survive_verbatim() {
    let input = r#"{"title": "Intro", "tags": ["Computer Science and Engg"], "path": ["Computer Science and Engg"], "rank": 0.5}"#;

    let document = rewrite_str(input, &RuleSet::default());

    let record = match document {
        Document::One(record) => record,
        Document::Many(_) => panic!("expected a single record"),
    };
    assert_eq!(record["title"], serde_json::json!("Intro"));
    // only `path` is rewritten, even when other fields hold the same label
    assert_eq!(record["tags"], serde_json::json!(["Computer Science and Engg"]));
    assert_eq!(record["path"], serde_json::json!(["Computer Science"]));
    assert_eq!(record["rank"], serde_json::json!(0.5));
}

#[test]
fn rules_file_drives_rewrite() {
    let rules_str = "
    Computer Science and Engg: Computer Science
    Maths: Mathematics
    ";
    let rules = rules_util::from_yaml_str(rules_str).unwrap();

    let input = r#"[{"path": ["Maths", "Algebra"]}, {"path": ["Computer Science and Engg"]}]"#;
    let expected = r#"[{"path": ["Mathematics", "Algebra"]}, {"path": ["Computer Science"]}]"#;

    let document = rewrite_str(input, &rules);

    assert_eq!(document, document_util::from_json_str(expected).unwrap());
}

use crate::error::Error;
use crate::rules::{RelabelRule, RuleSet};
use std::collections::HashSet;

pub fn from_yaml_str(yaml_str: &str) -> Result<RuleSet, Error> {
    let yaml_val: serde_yaml::Value = serde_yaml::from_str(yaml_str)?;
    build_rule_set(&yaml_val)
}

fn build_rule_set(yaml_val: &serde_yaml::Value) -> Result<RuleSet, Error> {
    let mapping = match yaml_val {
        serde_yaml::Value::Mapping(mapping) => mapping,
        _ => {
            return Err(Error::RulesMustBeMap {
                path_hint: "(root)".to_string(),
            })
        }
    };

    if mapping.is_empty() {
        return Err(Error::EmptyRuleSet);
    }

    let mut rules = Vec::with_capacity(mapping.len());

    for (key, value) in mapping {
        let from = extract_label(key, "(root)")?;
        let to = extract_label(value, &from)?;
        rules.push(RelabelRule { from, to });
    }

    check_rules_sanity(&rules)?;

    Ok(RuleSet(rules))
}

fn extract_label(yaml_val: &serde_yaml::Value, path_hint: &str) -> Result<String, Error> {
    let label = match yaml_val {
        serde_yaml::Value::String(label) => label,
        _ => {
            return Err(Error::RuleLabelMustBeString {
                path_hint: path_hint.to_string(),
            })
        }
    };

    if label.is_empty() {
        return Err(Error::EmptyRuleLabel {
            path_hint: path_hint.to_string(),
        });
    }

    Ok(label.clone())
}

fn check_rules_sanity(rules: &[RelabelRule]) -> Result<(), Error> {
    let from_labels: HashSet<&str> = rules.iter().map(|rule| rule.from.as_str()).collect();

    // a rewrite target that is itself rewritten would make a second pass change the output
    for rule in rules {
        if from_labels.contains(rule.to.as_str()) {
            return Err(Error::ConflictingRules {
                label: rule.to.clone(),
            });
        }
    }

    Ok(())
}

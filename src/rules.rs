pub const DEFAULT_FROM_LABEL: &str = "Computer Science and Engg";
pub const DEFAULT_TO_LABEL: &str = "Computer Science";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelabelRule {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet(pub Vec<RelabelRule>);

impl RuleSet {
    pub fn relabel(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|rule| rule.from == label)
            .map(|rule| rule.to.as_str())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet(vec![RelabelRule {
            from: DEFAULT_FROM_LABEL.to_string(),
            to: DEFAULT_TO_LABEL.to_string(),
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule() {
        let rules = RuleSet::default();
        assert_eq!(rules.relabel(DEFAULT_FROM_LABEL), Some(DEFAULT_TO_LABEL));
        assert_eq!(rules.relabel(DEFAULT_TO_LABEL), None);
        assert_eq!(rules.relabel("Math"), None);
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules = RuleSet(vec![
            RelabelRule {
                from: "a".to_string(),
                to: "b".to_string(),
            },
            RelabelRule {
                from: "a".to_string(),
                to: "c".to_string(),
            },
        ]);

        assert_eq!(rules.relabel("a"), Some("b"));
    }
}

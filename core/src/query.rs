use crate::types::TestOptions;

/// Assembles the query string attached to every test-dependencies request.
///
/// The rule is stable: `org`, then `severityThreshold`, then `fail-on`,
/// each emitted only when set. No other option fields are consulted, so
/// identical options always produce identical pairs.
pub fn assemble_query_string(options: &TestOptions) -> Vec<(String, String)> {
    let mut query = Vec::new();

    if let Some(org) = &options.org {
        query.push(("org".to_string(), org.clone()));
    }
    if let Some(threshold) = options.severity_threshold {
        query.push(("severityThreshold".to_string(), threshold.to_string()));
    }
    if let Some(fail_on) = &options.fail_on {
        query.push(("fail-on".to_string(), fail_on.clone()));
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn default_options_yield_no_pairs() {
        assert!(assemble_query_string(&TestOptions::default()).is_empty());
    }

    #[test]
    fn pairs_appear_in_fixed_order() {
        let options = TestOptions {
            json: true,
            org: Some("my-org".to_string()),
            severity_threshold: Some(Severity::High),
            fail_on: Some("upgradable".to_string()),
        };

        let query = assemble_query_string(&options);
        assert_eq!(
            query,
            vec![
                ("org".to_string(), "my-org".to_string()),
                ("severityThreshold".to_string(), "high".to_string()),
                ("fail-on".to_string(), "upgradable".to_string()),
            ]
        );
    }

    #[test]
    fn assembly_is_deterministic() {
        let options = TestOptions {
            org: Some("my-org".to_string()),
            ..TestOptions::default()
        };
        assert_eq!(
            assemble_query_string(&options),
            assemble_query_string(&options)
        );
    }
}

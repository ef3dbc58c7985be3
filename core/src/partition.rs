use crate::client::Outcome;
use crate::types::TestResult;

#[derive(Debug, Clone, Default)]
pub struct PartitionedResults {
    pub errors: Vec<String>,
    pub test_results: Vec<TestResult>,
}

/// Splits a mixed outcome stream into error messages and successful test
/// results. Pure fold; relative order within each side is preserved.
pub fn partition_outcomes(outcomes: Vec<Outcome>) -> PartitionedResults {
    let mut errors = Vec::new();
    let mut test_results = Vec::new();

    for outcome in outcomes {
        match outcome {
            Outcome::Success { test_result, .. } => test_results.push(test_result),
            Outcome::Failure { error, .. } => errors.push(error),
        }
    }

    PartitionedResults {
        errors,
        test_results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Identity, ScanResult};
    use std::collections::HashMap;

    fn scan_result() -> ScanResult {
        ScanResult {
            identity: Identity {
                kind: "pip".to_string(),
                target_file: None,
            },
            facts: vec![],
            name: None,
        }
    }

    fn success(graph: &str) -> Outcome {
        Outcome::Success {
            scan_result: scan_result(),
            test_result: TestResult {
                issues: vec![],
                issues_data: HashMap::new(),
                dep_graph_data: serde_json::Value::String(graph.to_string()),
            },
        }
    }

    fn failure(message: &str) -> Outcome {
        Outcome::Failure {
            scan_result: scan_result(),
            error: message.to_string(),
        }
    }

    #[test]
    fn empty_input_yields_empty_partitions() {
        let partitioned = partition_outcomes(vec![]);
        assert!(partitioned.errors.is_empty());
        assert!(partitioned.test_results.is_empty());
    }

    #[test]
    fn partition_is_complete_and_order_preserving() {
        let outcomes = vec![
            success("g0"),
            failure("e0"),
            success("g1"),
            failure("e1"),
            success("g2"),
        ];
        let total = outcomes.len();

        let partitioned = partition_outcomes(outcomes);

        assert_eq!(
            partitioned.errors.len() + partitioned.test_results.len(),
            total
        );
        assert_eq!(partitioned.errors, vec!["e0", "e1"]);
        let graphs: Vec<_> = partitioned
            .test_results
            .iter()
            .map(|r| r.dep_graph_data.as_str().unwrap().to_string())
            .collect();
        assert_eq!(graphs, vec!["g0", "g1", "g2"]);
    }
}

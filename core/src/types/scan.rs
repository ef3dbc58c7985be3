use serde::{Deserialize, Serialize};

/// An ecosystem-specific dependency inventory for one scanned target.
/// Opaque to the pipeline beyond routing; the facts carry whatever the
/// test service needs to compute findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub identity: Identity,
    pub facts: Vec<Fact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "targetFile", skip_serializing_if = "Option::is_none")]
    pub target_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let scan_result = ScanResult {
            identity: Identity {
                kind: "pip".to_string(),
                target_file: Some("requirements.txt".to_string()),
            },
            facts: vec![Fact {
                kind: "depGraph".to_string(),
                data: serde_json::json!({"pkgManager": "pip"}),
            }],
            name: None,
        };

        let value = serde_json::to_value(&scan_result).unwrap();
        assert_eq!(value["identity"]["type"], "pip");
        assert_eq!(value["identity"]["targetFile"], "requirements.txt");
        assert_eq!(value["facts"][0]["type"], "depGraph");
        assert!(value.get("name").is_none());
    }
}

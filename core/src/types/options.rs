use super::severity::Severity;

/// Per-invocation options. Immutable for the whole run; the path under
/// scan travels as an explicit parameter on the plugin contracts instead
/// of being threaded through here.
#[derive(Debug, Clone, Default)]
pub struct TestOptions {
    pub json: bool,
    pub org: Option<String>,
    pub severity_threshold: Option<Severity>,
    pub fail_on: Option<String>,
}

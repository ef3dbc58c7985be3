pub mod ecosystem;
pub mod options;
pub mod scan;
pub mod severity;

pub use ecosystem::Ecosystem;
pub use options::TestOptions;
pub use scan::{Fact, Identity, ScanResult};
pub use severity::Severity;
pub use test::{FixInfo, Issue, IssueData, IssuesData, TestResult};

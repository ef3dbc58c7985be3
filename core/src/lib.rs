//! Granska Core Library
//!
//! Orchestrates dependency vulnerability testing: ecosystem plugins
//! produce dependency inventories (scan results), a remote service
//! computes the findings, and the pipeline here coordinates scanning,
//! batched testing with partial-failure isolation, and rendering.

pub mod ci;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod partition;
pub mod pipeline;
pub mod plugin;
pub mod progress;
pub mod query;
pub mod types;

pub use client::{
    DependencyTester, HttpTestService, Outcome, ScansByPath, TestDependenciesResult, TestService,
};
pub use config::Config;
pub use error::{GranskaError, Result};
pub use http::HttpClient;
pub use partition::{partition_outcomes, PartitionedResults};
pub use pipeline::{test_ecosystem, TestCommandResult, TestPipeline};
pub use plugin::{
    DependencyScanner, EcosystemPlugin, PluginRegistry, ResultDisplay, ScanOutput, UnifiedTestOutput,
    UnifiedTester,
};
pub use progress::{ProgressNotifier, SilentNotifier};
pub use query::assemble_query_string;
pub use types::*;

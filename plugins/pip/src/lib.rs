pub mod detector;
pub mod display;
pub mod parser;
pub mod plugin;

pub use parser::Requirement;
pub use plugin::PipPlugin;

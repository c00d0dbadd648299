pub mod clipboard;
pub mod history;
pub mod output;
pub mod paths;

// Re-export the transform engine from retext-transform so consumers
// (main, integration tests) use `retext::transform::*`.
pub use retext_transform::TransformResult;
pub use retext_transform::transform;

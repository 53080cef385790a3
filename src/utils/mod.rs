/// File utilities
pub mod files;

/// Template rendering
pub mod renderer;

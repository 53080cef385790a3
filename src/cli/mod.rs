/// CLI Indexes: Output formats
pub mod formats;

pub use formats::OutputFormat;

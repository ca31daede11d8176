pub mod json_path;

// Re-export commonly used types
pub use json_path::JsonPath;

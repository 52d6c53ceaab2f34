pub mod document;
pub mod value;

// Re-export commonly used items
pub use document::{load_collection, parse_collection, write_collection};
pub use value::{is_empty_value, non_empty_str, resolve_token, split_tokens};

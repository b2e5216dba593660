pub mod data;
pub mod error;
pub mod io;
pub mod tmp;

pub mod aliases {
    pub type JsonError = serde_json::Error;

    /// Reads an environment variable, treating an unset, empty or non-unicode value as absent.
    pub fn getenv(name: &str) -> Option<String> {
        match std::env::var(name) {
            Ok(var) if var.is_empty() => None,
            Ok(var) => Some(var),
            Err(_) => None,
        }
    }
}

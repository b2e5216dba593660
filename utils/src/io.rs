use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads the whole file at `path`, or returns `None` if nothing exists there.
///
/// Unlike a plain `read_to_string`, a missing file is not an error. A path that exists but
/// can't be read (a directory, no permissions, invalid UTF-8) still is.
pub fn read_if_exists(path: &Path) -> io::Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    if path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("{} is a directory", path.display()),
        ));
    }

    let mut contents = String::new();
    File::open(path)?.read_to_string(&mut contents)?;

    Ok(Some(contents))
}

/// Returns `string`, or `"[]"` if it only has whitespace in it.
///
/// Lets an empty file be read as an empty JSON list.
pub fn fallback_string_if_needed(string: &str) -> &str {
    for ch in string.chars() {
        if !matches!(ch, '\n' | ' ' | '\t' | '\r') {
            return string;
        }
    }

    "[]"
}

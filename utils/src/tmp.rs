use rand::distributions::Alphanumeric;
use rand::Rng;

use std::path::PathBuf;

/// Picks a path in the system temp dir that doesn't exist yet.
///
/// Nothing is created; the caller owns whatever ends up at the path.
pub fn make_tmp(extension: Option<&str>) -> PathBuf {
    loop {
        let path_str = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(6)
            .collect::<String>();

        let mut pathbuf = std::env::temp_dir();
        pathbuf.push(format!(
            "tmp.{}{}",
            path_str,
            match extension {
                Some(ext) => format!(".{}", ext),
                None => String::new(),
            }
        ));

        if !pathbuf.as_path().exists() {
            break pathbuf;
        }
    }
}

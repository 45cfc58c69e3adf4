//! Safe temporary directory base so test scratch directories are never
//! created under the launcher's working directory (e.g. when TMPDIR=tmp).

use std::env;
use std::path::PathBuf;

/// Absolute directory suitable for creating temporary directories.
pub fn temp_dir_base() -> PathBuf {
    let dir = env::temp_dir();
    if dir.is_absolute() {
        return dir;
    }

    #[cfg(windows)]
    {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map_or_else(|_| PathBuf::from("C:\\Windows\\Temp"), PathBuf::from)
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}

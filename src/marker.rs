//! Install marker
//!
//! A sentinel file whose presence means "an update cycle started and has not
//! finished successfully". It is the only durable state of the launcher: the
//! next launch always reruns the full cycle while it exists.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{LauncherError, Result};

/// File name of the marker inside the launcher working directory
pub const MARKER_FILE: &str = "installing";

#[derive(Debug, Clone)]
pub struct InstallationMarker {
    path: PathBuf,
}

impl InstallationMarker {
    /// Marker at its well-known location under `work_dir`
    pub fn in_dir(work_dir: &Path) -> Self {
        Self {
            path: work_dir.join(MARKER_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the marker and flush it to disk before returning
    pub fn create(&self) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| self.io_error(&e))?;
        file.sync_all().map_err(|e| self.io_error(&e))?;
        self.sync_parent();
        tracing::debug!(path = %self.path.display(), "install marker created");
        Ok(())
    }

    /// Remove the marker; a missing marker is not an error
    pub fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                self.sync_parent();
                tracing::debug!(path = %self.path.display(), "install marker removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(&e)),
        }
    }

    /// Persist the directory entry itself (Unix only)
    fn sync_parent(&self) {
        #[cfg(unix)]
        if let Some(parent) = self.path.parent() {
            if let Err(e) = File::open(parent).and_then(|dir| dir.sync_all()) {
                tracing::debug!(error = %e, "could not sync marker directory");
            }
        }
    }

    fn io_error(&self, err: &std::io::Error) -> LauncherError {
        LauncherError::Marker {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

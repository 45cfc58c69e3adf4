//! The update cycle
//!
//! One launch runs at most one cycle:
//!
//! ```text
//! Clean ──(marker or stale or no checkout)──> Installing ──ok──> Complete
//!                                                  │
//!                                                  └──error──> Failed
//! ```
//!
//! The install marker is created before anything is touched and removed
//! only after every step succeeded, so an interrupted or failed cycle is
//! rerun in full on the next launch. Staleness is not consulted while the
//! marker exists.

use std::fmt;

use crate::config::RemoteTarget;
use crate::error::Result;
use crate::events::{InstallEvent, Notifier};
use crate::installer::PackageInstaller;
use crate::marker::InstallationMarker;
use crate::requirements::{self, InstallPlan};
use crate::sync::RepositorySyncer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Clean,
    Installing,
    Complete,
    Failed,
}

impl fmt::Display for CycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clean => "clean",
            Self::Installing => "installing",
            Self::Complete => "complete",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Why a cycle has to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateReason {
    /// The marker survived a previous cycle
    Interrupted,
    /// No local checkout yet
    MissingCheckout,
    /// Local HEAD differs from remote HEAD
    Stale,
    /// Heads could not be compared; treated as stale
    CheckFailed(String),
}

impl fmt::Display for UpdateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupted => f.write_str("previous update did not finish"),
            Self::MissingCheckout => f.write_str("no local checkout"),
            Self::Stale => f.write_str("remote has new commits"),
            Self::CheckFailed(reason) => write!(f, "staleness check failed ({reason})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    UpToDate,
    Update(UpdateReason),
}

/// Result of a successful cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    UpToDate,
    Updated { reason: UpdateReason, installed: usize },
}

/// Decides whether an update is needed and carries it out
pub struct UpdateCycle<'a> {
    target: RemoteTarget,
    marker: InstallationMarker,
    syncer: &'a dyn RepositorySyncer,
    installer: PackageInstaller<'a>,
}

impl<'a> UpdateCycle<'a> {
    pub fn new(
        target: RemoteTarget,
        marker: InstallationMarker,
        syncer: &'a dyn RepositorySyncer,
        installer: PackageInstaller<'a>,
    ) -> Self {
        Self {
            target,
            marker,
            syncer,
            installer,
        }
    }

    pub fn target(&self) -> &RemoteTarget {
        &self.target
    }

    /// Decide without changing anything on disk
    pub fn decide(&self) -> Decision {
        if self.marker.exists() {
            return Decision::Update(UpdateReason::Interrupted);
        }
        if !self.target.local_path.exists() {
            return Decision::Update(UpdateReason::MissingCheckout);
        }

        match self
            .syncer
            .is_current(&self.target.local_path, &self.target.url)
        {
            Ok(true) => Decision::UpToDate,
            Ok(false) => Decision::Update(UpdateReason::Stale),
            Err(e) => {
                tracing::warn!(error = %e, "could not check for updates, assuming stale");
                Decision::Update(UpdateReason::CheckFailed(e.to_string()))
            }
        }
    }

    /// The plan that an update would install from the current checkout
    pub fn plan(&self) -> InstallPlan {
        requirements::resolve(&self.target.local_path)
    }

    /// Run one cycle, reporting steps and progress to `notifier`.
    ///
    /// `Finished` is sent only on success. On error the marker is left in
    /// place.
    pub fn run(&self, notifier: &dyn Notifier) -> Result<CycleOutcome> {
        let reason = match self.decide() {
            Decision::UpToDate => {
                tracing::info!(state = %CycleState::Clean, "checkout is current");
                notifier.notify(InstallEvent::Finished);
                return Ok(CycleOutcome::UpToDate);
            }
            Decision::Update(reason) => reason,
        };

        tracing::info!(
            from = %CycleState::Clean,
            to = %CycleState::Installing,
            %reason,
            "starting update"
        );

        match self.update(notifier) {
            Ok(installed) => {
                tracing::info!(state = %CycleState::Complete, installed, "update complete");
                notifier.notify(InstallEvent::Finished);
                Ok(CycleOutcome::Updated { reason, installed })
            }
            Err(e) => {
                tracing::error!(state = %CycleState::Failed, error = %e, "update failed, marker kept");
                Err(e)
            }
        }
    }

    fn update(&self, notifier: &dyn Notifier) -> Result<usize> {
        self.marker.create()?;
        self.syncer.sync(&self.target.url, &self.target.local_path)?;

        let plan = self.plan();
        tracing::info!(entries = plan.len(), "resolved install plan");
        if !plan.is_empty() {
            self.installer.install(&plan, notifier)?;
        }

        self.marker.remove()?;
        Ok(plan.len())
    }
}

use std::path::PathBuf;

use csrimpact_bridge::proposal::SubmittedProposal;
use csrimpact_bridge::session::UserRole;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::{
    fs::{OpenOptions, create_dir_all, read_to_string},
    io::AsyncWriteExt,
};

/// Everything the application persists between runs: the session role and
/// the list of submitted proposals, newest first.
///
/// Submitted proposals only ever grow by prepending; entries are never
/// mutated or removed once written.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// The role chosen at the last completed login, if the session was not
    /// logged out since.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// User-submitted proposals, newest first.
    #[serde(default)]
    pub submitted_proposals: Vec<SubmittedProposal>,
}

/// Errors that can occur while loading or saving the persisted profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Failed to determine the user's data directories. This usually occurs
    /// when required environment variables are missing (e.g., `$HOME` on
    /// Unix or `%APPDATA%` on Windows).
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    /// An I/O error occurred while reading or writing the profile file.
    #[error("failed to access profile: {0}")]
    IoError(#[from] std::io::Error),
    /// Failed to serialize the profile to TOML (e.g., when saving changes).
    #[error("failed to serialize profile: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Durable key-value storage for the [`Profile`], backed by a TOML file.
///
/// The store carries its root directory explicitly so that tests can point
/// it at a temporary location; production code opens it under the user's
/// data directory via [`ProfileStore::open_default`].
#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    /// Opens the store in the user's platform data directory.
    pub fn open_default() -> Result<Self, ProfileError> {
        match ProjectDirs::from("org", "csrimpact", "csrimpact") {
            Some(dirs) => Ok(Self {
                root: dirs.data_dir().to_path_buf(),
            }),
            None => Err(ProfileError::DirectoriesNotFound),
        }
    }

    /// Opens the store at an explicit root directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn profile_path(&self) -> PathBuf {
        self.root.join("profile.toml")
    }

    /// Loads the persisted profile. A missing file yields the defaults; a
    /// malformed one is logged and discarded rather than propagated, so the
    /// application always starts.
    pub async fn load(&self) -> Result<Profile, ProfileError> {
        let profile_path = self.profile_path();
        log::info!("Loading profile from {profile_path:?}");
        if !profile_path.exists() {
            return Ok(Profile::default());
        }

        let contents = read_to_string(profile_path).await?;
        match toml::from_str(&contents) {
            Ok(profile) => Ok(profile),
            Err(e) => {
                log::warn!("Discarding malformed profile: {e}");
                Ok(Profile::default())
            }
        }
    }

    /// Saves the profile to disk. This function serializes the provided
    /// `Profile` to pretty-printed TOML and writes it to `profile.toml`
    /// under the store root, overwriting any existing file.
    pub async fn save(&self, profile: &Profile) -> Result<(), ProfileError> {
        let profile_path = self.profile_path();
        if let Some(parent) = profile_path.parent() {
            create_dir_all(parent).await?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(profile_path)
            .await?;

        let contents = toml::to_string_pretty(profile)?;
        file.write_all(contents.as_bytes()).await?;
        file.sync_all().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csrimpact_bridge::proposal::ProposalStatus;

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let store = ProfileStore::at(dir.path());

        let profile = store.load().await.expect("load should succeed");
        assert!(profile.role.is_none());
        assert!(profile.submitted_proposals.is_empty());
    }

    #[tokio::test]
    async fn profile_survives_a_save_and_load() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let store = ProfileStore::at(dir.path());

        let profile = Profile {
            role: Some(UserRole::Ngo),
            submitted_proposals: vec![SubmittedProposal {
                id: "APP-2026-4821".into(),
                title: "Solar Clinics".into(),
                date: "Aug 6, 2026".into(),
                status: ProposalStatus::Pending,
                raised: 0,
                goal: 500_000,
                progress: 0,
                rejection_reason: None,
            }],
        };
        store.save(&profile).await.expect("save should succeed");

        let loaded = store.load().await.expect("load should succeed");
        assert_eq!(loaded.role, Some(UserRole::Ngo));
        assert_eq!(loaded.submitted_proposals, profile.submitted_proposals);
    }

    #[tokio::test]
    async fn malformed_file_is_replaced_with_defaults() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let store = ProfileStore::at(dir.path());
        tokio::fs::create_dir_all(dir.path())
            .await
            .expect("should create store root");
        tokio::fs::write(dir.path().join("profile.toml"), "role = 17 this is not toml")
            .await
            .expect("should write junk");

        let profile = store.load().await.expect("load should not propagate parse errors");
        assert!(profile.role.is_none());
    }
}

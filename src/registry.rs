use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A named deployment: a name bound to the directory that holds its
/// docker-compose file. The directory is not validated at registration
/// time; a missing manifest is reported when the deployment is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRecord {
    pub name: String,
    pub directory: PathBuf,
}

/// On-disk shape of the settings file. Deployments are stored as an
/// ordered sequence of single-key mappings (`name -> {file_path}`),
/// kept for compatibility with existing stores.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    deployments: Vec<StoredRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
struct StoredRecord(BTreeMap<String, RecordBody>);

#[derive(Debug, Serialize, Deserialize)]
struct RecordBody {
    file_path: PathBuf,
}

/// The persisted collection of all known deployments.
///
/// Loaded fully into memory on every invocation; every mutation rewrites
/// the whole file (write to a sibling temp file, then rename over).
#[derive(Debug)]
pub struct Registry {
    path: PathBuf,
    records: Vec<DeploymentRecord>,
}

impl Registry {
    /// Load the registry from `path`. An absent file yields an empty
    /// registry; an unparseable file is a hard failure.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            return Ok(Self {
                path,
                records: Vec::new(),
            });
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings file at {}", path.display()))?;
        let settings: SettingsFile = serde_yaml::from_str(&contents)
            .map_err(|e| Error::CorruptStore(path.clone(), e))?;

        let records = settings
            .deployments
            .into_iter()
            .flat_map(|StoredRecord(map)| {
                map.into_iter().map(|(name, body)| DeploymentRecord {
                    name,
                    directory: body.file_path,
                })
            })
            .collect();

        Ok(Self { path, records })
    }

    /// Persist the full registry: create parent directories, write a
    /// sibling temp file, then rename it over the target.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }

        let contents = self.to_raw_yaml()?;

        let tmp = self.path.with_extension("yaml.tmp");
        fs::write(&tmp, contents)
            .with_context(|| format!("Failed to write settings file at {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace settings file at {}", self.path.display()))
    }

    /// Add a record and persist. Names are unique.
    pub fn add(&mut self, record: DeploymentRecord) -> Result<()> {
        if self.find(&record.name).is_some() {
            return Err(Error::DuplicateName(record.name).into());
        }
        self.records.push(record);
        self.save()
    }

    /// Remove a record by name and persist. Returns the removed record.
    pub fn remove(&mut self, name: &str) -> Result<DeploymentRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        let removed = self.records.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// Exact-match lookup by name
    pub fn find(&self, name: &str) -> Option<&DeploymentRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn records(&self) -> &[DeploymentRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The registry serialized in its on-disk YAML shape
    pub fn to_raw_yaml(&self) -> Result<String> {
        let settings = SettingsFile {
            deployments: self
                .records
                .iter()
                .map(|r| {
                    StoredRecord(BTreeMap::from([(
                        r.name.clone(),
                        RecordBody {
                            file_path: r.directory.clone(),
                        },
                    )]))
                })
                .collect(),
        };
        serde_yaml::to_string(&settings).context("Failed to serialize deployments")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    fn record(name: &str, dir: &str) -> DeploymentRecord {
        DeploymentRecord {
            name: name.to_string(),
            directory: PathBuf::from(dir),
        }
    }

    #[test]
    fn test_load_absent_file_is_empty() {
        let dir = tempdir().unwrap();
        let registry = Registry::load(dir.path().join("settings.yaml")).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_and_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.yaml");

        let mut registry = Registry::load(&path).unwrap();
        registry.add(record("plex", "/opt/plex")).unwrap();
        registry.add(record("gitea", "/opt/gitea")).unwrap();

        let reloaded = Registry::load(&path).unwrap();
        assert_eq!(reloaded.records(), registry.records());

        // save(load()) keeps the content semantically identical
        reloaded.save().unwrap();
        let again = Registry::load(&path).unwrap();
        assert_eq!(again.records(), registry.records());
    }

    #[test]
    fn test_add_duplicate_name_refused() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");

        let mut registry = Registry::load(&path).unwrap();
        registry.add(record("plex", "/opt/plex")).unwrap();

        let err = registry.add(record("plex", "/other")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::DuplicateName(name)) if name.as_str() == "plex"
        ));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find("plex").unwrap().directory, PathBuf::from("/opt/plex"));
    }

    #[test]
    fn test_remove_missing_name_is_safe() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");

        let mut registry = Registry::load(&path).unwrap();
        registry.add(record("plex", "/opt/plex")).unwrap();

        let err = registry.remove("jellyfin").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::NotFound(name)) if name.as_str() == "jellyfin"
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");

        let mut registry = Registry::load(&path).unwrap();
        registry.add(record("plex", "/opt/plex")).unwrap();
        let removed = registry.remove("plex").unwrap();
        assert_eq!(removed.directory, PathBuf::from("/opt/plex"));

        let reloaded = Registry::load(&path).unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_corrupt_store_is_hard_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "deployments: {not: [valid").unwrap();

        let err = Registry::load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::CorruptStore(p, _)) if *p == path
        ));
    }

    #[test]
    fn test_reads_existing_store_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(
            &path,
            "deployments:\n- plex:\n    file_path: /opt/plex\n- gitea:\n    file_path: /opt/gitea\n",
        )
        .unwrap();

        let registry = Registry::load(&path).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.records()[0], record("plex", "/opt/plex"));
        assert_eq!(registry.records()[1], record("gitea", "/opt/gitea"));
    }

    #[test]
    fn test_raw_yaml_matches_store_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");

        let mut registry = Registry::load(&path).unwrap();
        registry.add(record("plex", "/opt/plex")).unwrap();

        let raw = registry.to_raw_yaml().unwrap();
        assert!(raw.contains("deployments:"));
        assert!(raw.contains("plex:"));
        assert!(raw.contains("file_path: /opt/plex"));
    }
}

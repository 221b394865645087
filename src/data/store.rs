//! Memoized dataset snapshot
//!
//! Datasets are read from disk once; every render afterwards shares the same
//! `Arc<Datasets>`. With `reload_on_change` the store compares input file
//! modification times and swaps in a fresh snapshot when they move.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

use tracing::{debug, info, warn};

use super::{DataFiles, DatasetLoader, Datasets};
use crate::Result;

struct Loaded {
    datasets: Arc<Datasets>,
    source_mtimes: Vec<Option<SystemTime>>,
}

/// The load-once boundary handed to the web layer
pub struct DataStore {
    files: DataFiles,
    reload_on_change: bool,
    current: RwLock<Loaded>,
}

impl DataStore {
    /// Load every dataset now; a failure here is fatal for the dashboard
    pub fn open(files: DataFiles, reload_on_change: bool) -> Result<Self> {
        let source_mtimes = files.modification_times();
        let datasets = DatasetLoader::load(&files)?;

        Ok(Self {
            files,
            reload_on_change,
            current: RwLock::new(Loaded {
                datasets: Arc::new(datasets),
                source_mtimes,
            }),
        })
    }

    #[must_use]
    pub fn files(&self) -> &DataFiles {
        &self.files
    }

    /// The current snapshot, refreshed first when reloading is enabled
    pub fn snapshot(&self) -> Arc<Datasets> {
        if self.reload_on_change {
            self.refresh_if_stale();
        }
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .datasets
            .clone()
    }

    /// Reload when any input file changed since the last load.
    ///
    /// Returns whether a new snapshot was installed. A failed reload keeps
    /// the previous snapshot.
    pub fn refresh_if_stale(&self) -> bool {
        let mtimes = self.files.modification_times();
        {
            let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
            if current.source_mtimes == mtimes {
                return false;
            }
        }

        debug!("Input files changed, reloading datasets");
        match DatasetLoader::load(&self.files) {
            Ok(datasets) => {
                let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
                *current = Loaded {
                    datasets: Arc::new(datasets),
                    source_mtimes: mtimes,
                };
                info!("Reloaded datasets from {}", self.files.directory().display());
                true
            }
            Err(e) => {
                warn!("Keeping previous datasets, reload failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PLACES_FILE, SCAMS_FILE, fixtures};
    use std::fs::{self, File};
    use std::time::Duration;

    fn touch_later(path: &std::path::Path) {
        let file = File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::now() + Duration::from_secs(60))
            .unwrap();
    }

    #[test]
    fn test_snapshot_is_shared() {
        let dir = fixtures::sample_data_dir();
        let store = DataStore::open(DataFiles::new(dir.path()), false).unwrap();

        let first = store.snapshot();
        let second = store.snapshot();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.places.len(), 3);
    }

    #[test]
    fn test_snapshot_survives_file_removal_without_reload() {
        let dir = fixtures::sample_data_dir();
        let store = DataStore::open(DataFiles::new(dir.path()), false).unwrap();

        fs::remove_file(dir.path().join(PLACES_FILE)).unwrap();
        assert_eq!(store.snapshot().places.len(), 3);
    }

    #[test]
    fn test_open_fails_on_missing_file() {
        let dir = fixtures::sample_data_dir();
        fs::remove_file(dir.path().join(SCAMS_FILE)).unwrap();
        assert!(DataStore::open(DataFiles::new(dir.path()), false).is_err());
    }

    #[test]
    fn test_reload_on_change() {
        let dir = fixtures::sample_data_dir();
        let store = DataStore::open(DataFiles::new(dir.path()), true).unwrap();
        assert!(!store.refresh_if_stale());

        let places = dir.path().join(PLACES_FILE);
        fs::write(
            &places,
            "name,type,description,latitude,longitude,entry_fee,popularity\nTaj Mahal,Monument,Tomb,27.1751,78.0421,50,5\n",
        )
        .unwrap();
        touch_later(&places);

        assert_eq!(store.snapshot().places.len(), 1);
    }

    #[test]
    fn test_failed_reload_keeps_previous_snapshot() {
        let dir = fixtures::sample_data_dir();
        let store = DataStore::open(DataFiles::new(dir.path()), true).unwrap();

        let scams = dir.path().join(SCAMS_FILE);
        fs::write(&scams, "not json").unwrap();
        touch_later(&scams);

        assert!(!store.refresh_if_stale());
        assert_eq!(store.snapshot().scams.len(), 3);
    }
}

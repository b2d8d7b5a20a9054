use crate::dataset::ingest::Datasets;
use crate::error::AppError;
use crate::icons::catalog::Catalogs;
use std::sync::{Arc, Mutex, MutexGuard};

/// Issued when a load starts; only the newest token may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

#[derive(Debug)]
struct SlotState<T> {
    issued: u64,
    value: Arc<T>,
}

// Whole-value slot: loads replace the value, never patch it.
#[derive(Debug)]
struct Slot<T> {
    state: Mutex<SlotState<T>>,
}

impl<T> Slot<T> {
    fn new(value: T) -> Self {
        Slot {
            state: Mutex::new(SlotState {
                issued: 0,
                value: Arc::new(value),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SlotState<T>> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self) -> LoadToken {
        let mut state = self.lock();
        state.issued += 1;
        LoadToken(state.issued)
    }

    fn commit(&self, token: LoadToken, value: T) -> bool {
        let mut state = self.lock();
        if token.0 != state.issued {
            return false;
        }
        state.value = Arc::new(value);
        true
    }

    fn current(&self) -> Arc<T> {
        Arc::clone(&self.lock().value)
    }
}

/// Session-scoped state: the icon catalogs and the uploaded datasets.
#[derive(Debug)]
pub struct Session {
    catalogs: Slot<Catalogs>,
    datasets: Slot<Datasets>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            catalogs: Slot::new(Catalogs::empty()),
            datasets: Slot::new(Datasets::default()),
        }
    }

    pub fn begin_catalog_load(&self) -> LoadToken {
        self.catalogs.begin()
    }

    /// Stores the catalogs unless a newer load has started since `token`.
    pub fn commit_catalogs(&self, token: LoadToken, catalogs: Catalogs) -> bool {
        let committed = self.catalogs.commit(token, catalogs);
        if !committed {
            tracing::debug!("Discarding stale icon catalogs");
        }
        committed
    }

    /// Commits the outcome of a catalog load. A failed load commits empty
    /// catalogs so lookups fall back to placeholders.
    pub fn finish_catalog_load(&self, token: LoadToken, result: Result<Catalogs, AppError>) -> bool {
        let catalogs = match result {
            Ok(catalogs) => {
                catalogs.log_summary();
                catalogs
            }
            Err(e) => {
                tracing::warn!("Icon catalogs unavailable, continuing without icons: {}", e);
                Catalogs::empty()
            }
        };
        self.commit_catalogs(token, catalogs)
    }

    pub fn catalogs(&self) -> Arc<Catalogs> {
        self.catalogs.current()
    }

    pub fn begin_ingest(&self) -> LoadToken {
        self.datasets.begin()
    }

    /// Replaces all four datasets unless a newer ingest has started since `token`.
    pub fn commit_datasets(&self, token: LoadToken, datasets: Datasets) -> bool {
        let committed = self.datasets.commit(token, datasets);
        if !committed {
            tracing::debug!("Discarding stale upload batch");
        }
        committed
    }

    pub fn datasets(&self) -> Arc<Datasets> {
        self.datasets.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ingest::Ingest;
    use crate::dataset::row::{DataRow, Scalar};
    use std::thread;

    fn rows(champion: &str) -> Vec<DataRow> {
        vec![DataRow::new().with("champion_name", Scalar::coerce(champion))]
    }

    #[test]
    fn test_commit_replaces_whole_batch() {
        let session = Session::new();

        let token = session.begin_ingest();
        let first = Datasets {
            prismatic: rows("Vayne"),
            augment: rows("Vayne"),
            ..Datasets::default()
        };
        assert!(session.commit_datasets(token, first));
        assert_eq!(session.datasets().augment.len(), 1);

        // Second batch has no augment file.
        let mut ingest = Ingest::new();
        ingest
            .add_file(
                "prismatic.csv",
                "champion_name,item_name,win_rate_present,n_present\nJinx,Cruelty,0.5,10\n".as_bytes(),
            )
            .unwrap();
        let token = session.begin_ingest();
        assert!(session.commit_datasets(token, ingest.finish()));

        let current = session.datasets();
        assert!(current.augment.is_empty());
        assert_eq!(current.prismatic[0].champion(), "Jinx");
    }

    #[test]
    fn test_stale_commit_is_discarded() {
        let session = Session::new();
        let stale = session.begin_ingest();
        let fresh = session.begin_ingest();

        assert!(session.commit_datasets(fresh, Datasets { voucher: rows("Ahri"), ..Datasets::default() }));
        assert!(!session.commit_datasets(stale, Datasets { voucher: rows("Zed"), ..Datasets::default() }));
        assert_eq!(session.datasets().voucher[0].champion(), "Ahri");
    }

    #[test]
    fn test_catalog_commit_from_worker_thread() {
        let session = Arc::new(Session::new());
        assert!(session.catalogs().items.is_empty());

        let token = session.begin_catalog_load();
        let worker = {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                let mut catalogs = Catalogs::empty();
                catalogs.items.insert("cruelty".into(), "https://x/cruelty.png".into());
                session.commit_catalogs(token, catalogs)
            })
        };

        assert!(worker.join().unwrap());
        assert_eq!(session.catalogs().items.get("cruelty"), Some("https://x/cruelty.png"));
    }

    #[test]
    fn test_failed_catalog_load_commits_empty_catalogs() {
        let session = Session::new();
        let token = session.begin_catalog_load();
        let mut catalogs = Catalogs::empty();
        catalogs.items.insert("cruelty".into(), "https://x/cruelty.png".into());
        assert!(session.finish_catalog_load(token, Ok(catalogs)));
        assert_eq!(session.catalogs().items.len(), 1);

        let token = session.begin_catalog_load();
        let failed = Err(AppError::HttpError("connection refused".to_string()));
        assert!(session.finish_catalog_load(token, failed));

        let current = session.catalogs();
        assert!(current.is_empty());
        assert_eq!(current.items.get("cruelty"), None);
    }

    #[test]
    fn test_stale_failed_catalog_load_is_discarded() {
        let session = Session::new();
        let stale = session.begin_catalog_load();
        let fresh = session.begin_catalog_load();

        let mut catalogs = Catalogs::empty();
        catalogs.augments.insert("typhoon".into(), "https://x/t.png".into());
        assert!(session.finish_catalog_load(fresh, Ok(catalogs)));
        assert!(!session.finish_catalog_load(stale, Err(AppError::JsonError("eof".to_string()))));
        assert_eq!(session.catalogs().augments.len(), 1);
    }

    #[test]
    fn test_snapshot_survives_later_commit() {
        let session = Session::new();
        let snapshot = session.catalogs();

        let token = session.begin_catalog_load();
        let mut catalogs = Catalogs::empty();
        catalogs.augments.insert("typhoon".into(), "https://x/t.png".into());
        session.commit_catalogs(token, catalogs);

        assert!(snapshot.augments.is_empty());
        assert_eq!(session.catalogs().augments.len(), 1);
    }
}

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use chrono::{DateTime, Utc};
use promptsearch::{Catalog, LoadControl, Loader, MatchOptions, Matcher};
use std::sync::{Arc, RwLock};

/// Shared application state
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Matcher instance (shared across requests)
    pub matcher: Matcher,

    /// Current catalog snapshot, replaced wholesale on reload
    snapshot: RwLock<Snapshot>,
}

#[derive(Clone)]
struct Snapshot {
    catalog: Arc<Catalog>,
    loaded_at: DateTime<Utc>,
}

impl ServerState {
    /// Create server state and perform the initial catalog load
    pub async fn new(config: ServerConfig) -> ServerResult<Self> {
        let state = Self::from_catalog(config, Catalog::default());
        state.reload().await?;
        Ok(state)
    }

    /// Create server state around an already loaded catalog
    pub fn from_catalog(config: ServerConfig, catalog: Catalog) -> Self {
        let matcher = Matcher::new(MatchOptions {
            question_match: config.question_match,
        });

        Self {
            config: Arc::new(config),
            matcher,
            snapshot: RwLock::new(Snapshot {
                catalog: Arc::new(catalog),
                loaded_at: Utc::now(),
            }),
        }
    }

    /// Current catalog. The read lock is released before this returns.
    pub fn catalog(&self) -> Arc<Catalog> {
        self.read_snapshot().catalog
    }

    /// When the current catalog was installed
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.read_snapshot().loaded_at
    }

    /// Load a fresh catalog from the configured source and swap it in.
    ///
    /// The previous snapshot stays in place if the load fails or times out.
    pub async fn reload(&self) -> ServerResult<Arc<Catalog>> {
        let source = self.config.source();
        let timeout = self.config.load_timeout();
        let control = LoadControl::new().with_timeout(timeout);
        let worker = control.clone();

        let task = tokio::task::spawn_blocking(move || Loader::new(source).load_with(&worker));
        let catalog = match tokio::time::timeout(timeout, task).await {
            Ok(joined) => joined??,
            Err(_) => {
                control.cancel();
                tracing::warn!(timeout_secs = timeout.as_secs(), "catalog load timed out");
                return Err(ServerError::Timeout);
            }
        };

        let catalog = Arc::new(catalog);
        self.install(catalog.clone());
        tracing::info!(
            prompts = catalog.prompt_count(),
            questions = catalog.question_count(),
            "catalog snapshot installed"
        );
        Ok(catalog)
    }

    fn install(&self, catalog: Arc<Catalog>) {
        let next = Snapshot {
            catalog,
            loaded_at: Utc::now(),
        };
        match self.snapshot.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }

    fn read_snapshot(&self) -> Snapshot {
        match self.snapshot.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptsearch::{PromptRecord, QuestionRecord};

    fn catalog_with_one_question() -> Catalog {
        Catalog::new(
            Vec::<PromptRecord>::new(),
            vec![QuestionRecord {
                id: "q-1".into(),
                question_text: "Why is the sky blue?".into(),
            }],
        )
    }

    #[test]
    fn from_catalog_exposes_snapshot() {
        let state = ServerState::from_catalog(ServerConfig::default(), catalog_with_one_question());
        assert_eq!(state.catalog().question_count(), 1);
    }

    #[test]
    fn snapshot_outlives_swap() {
        let state = ServerState::from_catalog(ServerConfig::default(), catalog_with_one_question());
        let held = state.catalog();
        state.install(Arc::new(Catalog::default()));

        assert_eq!(held.question_count(), 1);
        assert!(state.catalog().is_empty());
    }

    #[tokio::test]
    async fn timed_out_reload_keeps_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("roles")).unwrap();
        std::fs::create_dir_all(dir.path().join("questions")).unwrap();
        let config = ServerConfig {
            data_dir: dir.path().to_path_buf(),
            load_timeout_secs: 0,
            ..ServerConfig::default()
        };
        let state = ServerState::from_catalog(config, catalog_with_one_question());
        let before = state.loaded_at();

        let err = state.reload().await.unwrap_err();
        assert!(matches!(err, ServerError::Timeout));
        assert_eq!(state.catalog().question_count(), 1);
        assert_eq!(state.loaded_at(), before);
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            data_dir: dir.path().join("missing"),
            ..ServerConfig::default()
        };
        let state = ServerState::from_catalog(config, catalog_with_one_question());

        let err = state.reload().await.unwrap_err();
        assert!(matches!(err, ServerError::Load(_)));
        assert_eq!(state.catalog().question_count(), 1);
    }
}

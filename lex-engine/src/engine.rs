use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use moka::sync::Cache;
use tracing::{error, info};
use uuid::Uuid;

use lex_authority::AuthorityScorer;
use lex_core::citation::CitationEdge;
use lex_core::config::EngineConfig;
use lex_core::errors::{LexError, LexResult, ScoreError, StoreError};
use lex_core::models::{
    AuthoritySnapshot, CitationRecord, RankCriteria, RescoreHandle, RescoreStatus,
    TreatmentSummary, ValidityRecord,
};
use lex_core::traits::GraphStore;
use lex_rank::{DoctrineEvolution, PrecedentRanker, RankOutcome};
use lex_validity::{summarize_treatment, ValidityResolver};
use lex_weight::factors::jurisdictional;

const VALIDITY_CACHE_CAPACITY: u64 = 10_000;

/// Finished rescore handles retained for status queries.
const MAX_FINISHED_JOBS: usize = 32;

struct RescoreJob {
    handle: RescoreHandle,
    cancel: Arc<AtomicBool>,
}

/// The engine facade. Cheap to share: wrap in an `Arc` and clone across
/// tasks; all methods take `&self`.
///
/// Readers of the published snapshot are lock-free in practice — the
/// `RwLock` guards only the `Arc` pointer swap, and every reader clones
/// the `Arc` out immediately.
pub struct LexEngine {
    store: Arc<dyn GraphStore>,
    config: EngineConfig,
    snapshot: RwLock<Arc<AuthoritySnapshot>>,
    validity_cache: Cache<(String, NaiveDate), ValidityRecord>,
    jobs: DashMap<String, RescoreJob>,
    /// Single-writer computation lock: id of the in-flight rescore job.
    active_job: Mutex<Option<String>>,
    version_counter: AtomicU64,
}

impl LexEngine {
    pub fn new(store: Arc<dyn GraphStore>, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            snapshot: RwLock::new(Arc::new(AuthoritySnapshot::empty())),
            validity_cache: Cache::builder()
                .max_capacity(VALIDITY_CACHE_CAPACITY)
                .build(),
            jobs: DashMap::new(),
            active_job: Mutex::new(None),
            version_counter: AtomicU64::new(1),
        }
    }

    /// The currently published snapshot. Version 0 means no scoring pass
    /// has finished yet.
    pub fn snapshot(&self) -> Arc<AuthoritySnapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Classify, weigh, and persist one citation record.
    ///
    /// Ingestion never blocks on extraction noise: unrecognized
    /// descriptors become low-certainty neutral edges. Both endpoint
    /// cases must already exist. The new edge is picked up by the next
    /// scoring pass, not the current snapshot.
    pub fn ingest_citation(&self, record: &CitationRecord) -> LexResult<CitationEdge> {
        let citing = self.store.get_case(&record.citing_id)?.ok_or_else(|| {
            StoreError::EdgeEndpointMissing {
                citing_id: record.citing_id.clone(),
                cited_id: record.cited_id.clone(),
                side: "citing",
            }
        })?;
        let cited = self.store.get_case(&record.cited_id)?.ok_or_else(|| {
            StoreError::EdgeEndpointMissing {
                citing_id: record.citing_id.clone(),
                cited_id: record.cited_id.clone(),
                side: "cited",
            }
        })?;

        let citing_court =
            self.store
                .get_court(&citing.court_id)?
                .ok_or_else(|| StoreError::CourtNotFound {
                    court_id: citing.court_id.clone(),
                })?;
        let cited_court =
            self.store
                .get_court(&cited.court_id)?
                .ok_or_else(|| StoreError::CourtNotFound {
                    court_id: cited.court_id.clone(),
                })?;

        let mut edge = lex_treatment::classify(record).into_edge(record);
        edge.binding = jurisdictional::is_binding(&citing_court, &cited_court);
        // The citing opinion's issue date anchors the temporal factor, so
        // the stored weight is reproducible whenever ingestion runs.
        edge.weight = lex_weight::compute(
            &edge,
            &citing_court,
            &cited_court,
            cited.decision_date,
            record.created_on,
        );

        self.store.upsert_edge(&edge)?;
        self.validity_cache.invalidate_all();

        info!(
            citing = %edge.citing_id,
            cited = %edge.cited_id,
            treatment = %edge.treatment.as_str(),
            weight = edge.weight,
            "citation ingested"
        );
        Ok(edge)
    }

    /// Authority score and snapshot version for a case, if the published
    /// snapshot covers it.
    pub fn get_authority(&self, case_id: &str) -> Option<(f64, u64)> {
        let snapshot = self.snapshot();
        snapshot.score(case_id).map(|s| (s, snapshot.version))
    }

    /// Resolve validity as of `as_of` (default today). Results are cached
    /// per (case, date) until the next edge ingestion. Current-date
    /// resolutions also persist the status onto the case row.
    pub fn get_validity(
        &self,
        case_id: &str,
        as_of: Option<NaiveDate>,
    ) -> LexResult<ValidityRecord> {
        let effective = as_of.unwrap_or_else(|| Utc::now().date_naive());
        let key = (case_id.to_string(), effective);
        if let Some(hit) = self.validity_cache.get(&key) {
            return Ok(hit);
        }

        let resolver = ValidityResolver::new(self.config.resolver.clone());
        let record = if as_of.is_none() {
            resolver.resolve_and_record(self.store.as_ref(), case_id, Some(effective))?
        } else {
            resolver.resolve(self.store.as_ref(), case_id, Some(effective))?
        };

        if !record.incomplete {
            self.validity_cache.insert(key, record.clone());
        }
        Ok(record)
    }

    /// Aggregate treatment counts for a case as of a date.
    pub fn get_treatment_summary(
        &self,
        case_id: &str,
        as_of: Option<NaiveDate>,
    ) -> LexResult<TreatmentSummary> {
        summarize_treatment(self.store.as_ref(), case_id, as_of)
    }

    /// Rank precedents for a research query against the published snapshot.
    pub fn rank_precedents(&self, criteria: &RankCriteria) -> LexResult<RankOutcome> {
        let snapshot = self.snapshot();
        let ranker = PrecedentRanker::new(self.config.ranker.clone());
        ranker.rank(self.store.as_ref(), &snapshot, criteria)
    }

    /// Trace doctrine evolution from landmark cases carrying any of
    /// `doctrine_tags`, through chains of positive citations.
    pub fn trace_doctrine_evolution(
        &self,
        doctrine_tags: &[String],
    ) -> LexResult<Vec<DoctrineEvolution>> {
        lex_rank::trace_doctrine_evolution(self.store.as_ref(), doctrine_tags, &self.config.ranker)
    }

    /// Start a background scoring pass, or return the in-flight job's
    /// handle if one is already running (idempotent).
    ///
    /// Must be called within a tokio runtime; the pass itself runs on the
    /// blocking pool and publishes by atomic snapshot swap.
    pub fn trigger_rescore(self: &Arc<Self>) -> RescoreHandle {
        let mut active = self
            .active_job
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(job_id) = active.as_ref() {
            if let Some(job) = self.jobs.get(job_id) {
                info!(job_id = %job_id, "rescore already in flight, returning its handle");
                return job.handle.clone();
            }
        }

        let job_id = Uuid::new_v4().to_string();
        let handle = RescoreHandle {
            job_id: job_id.clone(),
            status: RescoreStatus::Running,
            started_at: Utc::now(),
            snapshot_version: None,
        };
        let cancel = Arc::new(AtomicBool::new(false));
        self.jobs.insert(
            job_id.clone(),
            RescoreJob {
                handle: handle.clone(),
                cancel: cancel.clone(),
            },
        );
        *active = Some(job_id.clone());
        drop(active);

        let engine = Arc::clone(self);
        let id = job_id.clone();
        tokio::task::spawn_blocking(move || engine.run_rescore(&id, &cancel));

        info!(job_id = %job_id, "rescore started");
        handle
    }

    /// Status of a rescore job, if known.
    pub fn rescore_status(&self, job_id: &str) -> Option<RescoreHandle> {
        self.jobs.get(job_id).map(|j| j.handle.clone())
    }

    /// Request cooperative cancellation of a running rescore job. Takes
    /// effect between iterations; returns false for unknown jobs.
    pub fn cancel_rescore(&self, job_id: &str) -> bool {
        match self.jobs.get(job_id) {
            Some(job) => {
                job.cancel.store(true, Ordering::Relaxed);
                true
            }
            None => false,
        }
    }

    fn run_rescore(self: Arc<Self>, job_id: &str, cancel: &AtomicBool) {
        let version = self.version_counter.fetch_add(1, Ordering::SeqCst);
        let mut scorer = AuthorityScorer::new(self.config.scorer.clone());

        let (status, published) = match scorer.compute(self.store.as_ref(), version, cancel) {
            Ok(snapshot) => {
                let status = if snapshot.converged {
                    RescoreStatus::Published
                } else {
                    RescoreStatus::PublishedUnconverged
                };
                let snapshot = Arc::new(snapshot);
                *self
                    .snapshot
                    .write()
                    .unwrap_or_else(PoisonError::into_inner) = snapshot;
                (status, Some(version))
            }
            Err(LexError::Score(ScoreError::Cancelled { iterations })) => {
                info!(job_id, iterations, "rescore cancelled");
                (RescoreStatus::Cancelled, None)
            }
            Err(e) => {
                error!(job_id, error = %e, "rescore failed");
                (RescoreStatus::Failed, None)
            }
        };

        if let Some(mut job) = self.jobs.get_mut(job_id) {
            job.handle.status = status;
            job.handle.snapshot_version = published;
        }
        let mut active = self
            .active_job
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if active.as_deref() == Some(job_id) {
            *active = None;
        }
        drop(active);

        self.prune_finished_jobs();
    }

    /// Drop the oldest terminal job handles past the retention cap. The
    /// running job is never evicted.
    fn prune_finished_jobs(&self) {
        let mut finished: Vec<(String, DateTime<Utc>)> = self
            .jobs
            .iter()
            .filter(|entry| entry.value().handle.status.is_terminal())
            .map(|entry| (entry.key().clone(), entry.value().handle.started_at))
            .collect();
        if finished.len() <= MAX_FINISHED_JOBS {
            return;
        }
        finished.sort_by(|a, b| a.1.cmp(&b.1));
        for (job_id, _) in finished.drain(..finished.len() - MAX_FINISHED_JOBS) {
            self.jobs.remove(&job_id);
        }
    }
}

//! Growth-run metrics collection.
//!
//! Provides structured logging and counters for monitoring how a universe
//! grows: how many synthesis calls produced a novel distinction, hit the
//! memoized path, or were reflexive fixed points.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Classification of one synthesis step from the driver's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new distinction was created.
    Novel,
    /// The pair had already been synthesized; the existing result returned.
    Memoized,
    /// Both operands were the same distinction; nothing changed.
    Reflexive,
}

/// Metrics collector for one growth run.
pub struct Metrics {
    step_count: AtomicU64,
    novel: AtomicU64,
    memoized: AtomicU64,
    reflexive: AtomicU64,
    distinction_count: AtomicU64,
    relation_count: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step_count: AtomicU64::new(0),
            novel: AtomicU64::new(0),
            memoized: AtomicU64::new(0),
            reflexive: AtomicU64::new(0),
            distinction_count: AtomicU64::new(0),
            relation_count: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed synthesis step and the resulting universe size.
    pub fn record_step(&self, outcome: StepOutcome, distinctions: usize, relations: usize) {
        self.step_count.fetch_add(1, Ordering::Relaxed);
        match outcome {
            StepOutcome::Novel => &self.novel,
            StepOutcome::Memoized => &self.memoized,
            StepOutcome::Reflexive => &self.reflexive,
        }
        .fetch_add(1, Ordering::Relaxed);
        self.distinction_count
            .store(distinctions as u64, Ordering::Relaxed);
        self.relation_count.store(relations as u64, Ordering::Relaxed);

        // Log at info level every 1000 steps
        let step = self.step_count.load(Ordering::Relaxed);
        if step % 1000 == 0 {
            tracing::info!(
                step = step,
                distinctions = distinctions,
                relations = relations,
                novel = self.novel.load(Ordering::Relaxed),
                memoized = self.memoized.load(Ordering::Relaxed),
                reflexive = self.reflexive.load(Ordering::Relaxed),
                "Synthesis step"
            );
        }
    }

    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn novel_count(&self) -> u64 {
        self.novel.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn memoized_count(&self) -> u64 {
        self.memoized.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn reflexive_count(&self) -> u64 {
        self.reflexive.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn distinction_count(&self) -> u64 {
        self.distinction_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn relation_count(&self) -> u64 {
        self.relation_count.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}

//! Orchestration of a growth run: engine, metrics, RNG and snapshot cadence.

use crate::growth;
use anyhow::{Context, Result};
use distinction_core::{AppConfig, Engine, Metrics, StepOutcome};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;

/// One growth run over one universe.
pub struct App {
    pub config: AppConfig,
    pub engine: Engine,
    pub metrics: Metrics,
    rng: ChaCha8Rng,
    steps_taken: u64,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.growth.seed);
        Ok(Self {
            config,
            engine: Engine::new(),
            metrics: Metrics::new(),
            rng,
            steps_taken: 0,
        })
    }

    /// Builds an app from a config file, falling back to defaults when the
    /// file is absent.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            AppConfig::from_toml(&content)
                .with_context(|| format!("parsing {}", path.display()))?
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            AppConfig::default()
        };
        Self::new(config)
    }

    /// Performs one synthesis step under the configured strategy.
    pub fn step(&mut self) -> Result<StepOutcome> {
        let (a, b) = growth::select_pair(&self.engine, self.config.growth.strategy, &mut self.rng);
        let before = self.engine.distinction_count();
        self.engine.synthesize(&a, &b)?;
        let outcome = if a == b {
            StepOutcome::Reflexive
        } else if self.engine.distinction_count() > before {
            StepOutcome::Novel
        } else {
            StepOutcome::Memoized
        };
        self.steps_taken += 1;
        self.metrics.record_step(
            outcome,
            self.engine.distinction_count(),
            self.engine.relation_count(),
        );
        Ok(outcome)
    }

    /// Runs the configured number of steps, reporting and persisting at the
    /// configured intervals, then writes a final snapshot.
    pub fn run(&mut self) -> Result<()> {
        let steps = self.config.growth.steps;
        tracing::info!(
            steps,
            seed = self.config.growth.seed,
            strategy = ?self.config.growth.strategy,
            config = %self.config.fingerprint(),
            "starting growth run"
        );
        for step in 1..=steps {
            self.step()?;
            if step % self.config.growth.report_interval == 0 {
                tracing::info!(
                    step,
                    distinctions = self.engine.distinction_count(),
                    relations = self.engine.relation_count(),
                    "growth progress"
                );
            }
            let interval = self.config.output.snapshot_interval;
            if interval > 0 && step % interval == 0 {
                self.save_snapshot()?;
            }
        }
        self.save_snapshot()?;
        tracing::info!(
            steps = self.steps_taken,
            novel = self.metrics.novel_count(),
            memoized = self.metrics.memoized_count(),
            reflexive = self.metrics.reflexive_count(),
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "growth run finished"
        );
        Ok(())
    }

    /// Writes the current snapshot to the configured path.
    pub fn save_snapshot(&self) -> Result<()> {
        distinction_io::save_snapshot(&self.config.output.snapshot_path, &self.engine)
            .with_context(|| {
                format!("saving snapshot to {}", self.config.output.snapshot_path)
            })?;
        Ok(())
    }

    #[must_use]
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_starts_with_primordial_pair() {
        let app = App::new(AppConfig::default()).unwrap();
        assert_eq!(app.engine.distinction_count(), 2);
        assert_eq!(app.engine.relation_count(), 0);
        assert_eq!(app.steps_taken(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AppConfig::default();
        config.growth.steps = 0;
        assert!(App::new(config).is_err());
    }

    #[test]
    fn test_step_advances_counters() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for _ in 0..10 {
            app.step().unwrap();
        }
        assert_eq!(app.steps_taken(), 10);
        assert_eq!(app.metrics.step_count(), 10);
        assert!(app.engine.distinction_count() >= 2);
    }
}

use distinction_core::{AppConfig, PairStrategy};
use distinction_lib::app::App;

/// Builds apps with test-friendly defaults; stepping through `grown` keeps
/// everything in memory (no snapshot files are written).
#[allow(dead_code)]
pub struct UniverseBuilder {
    config: AppConfig,
}

#[allow(dead_code)]
impl UniverseBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.growth.seed = seed;
        self
    }

    pub fn with_strategy(mut self, strategy: PairStrategy) -> Self {
        self.config.growth.strategy = strategy;
        self
    }

    pub fn with_snapshot_path(mut self, path: &str) -> Self {
        self.config.output.snapshot_path = path.to_string();
        self
    }

    pub fn build(self) -> App {
        App::new(self.config).expect("test config is valid")
    }

    pub fn grown(self, steps: u64) -> App {
        let mut app = self.build();
        for _ in 0..steps {
            app.step().expect("growth step over registered operands");
        }
        app
    }
}

use std::time::Instant;

use log::info;

use crate::experiment::ExperimentReport;

pub struct ExperimentStats {
    title: String,
    passed: usize,
    total: usize,
    first: Instant,
    last: Instant,
}

impl ExperimentStats {
    pub fn new(report: &ExperimentReport, first: Instant, last: Instant) -> ExperimentStats {
        Self {
            title: report.name().to_string(),
            passed: report.passed(),
            total: report.len(),
            first,
            last,
        }
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.last.duration_since(self.first).as_secs_f32() * 1000.0
    }

    pub fn pass_rate(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.passed as f32 / self.total as f32
    }

    pub fn log_stats(&self) {
        let per_seed = self.elapsed_ms() / self.total.max(1) as f32;
        info!(
            "{}: {}/{} seeds buildable ({:.0}%), {:.1}ms total, {:.1}ms per seed",
            self.title,
            self.passed,
            self.total,
            self.pass_rate() * 100.0,
            self.elapsed_ms(),
            per_seed,
        )
    }
}

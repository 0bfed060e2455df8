use crate::io::solver_output::Solution;
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub count: usize,
    pub limit: usize,
    pub took_ms: u64,
    /// Whether the limit cut off further solutions
    pub truncated: bool,
}

impl Statistics {
    pub fn new(count: usize, limit: usize, took: Duration) -> Statistics {
        Statistics {
            count,
            limit,
            took_ms: took.as_millis() as u64,
            truncated: limit > 0 && count >= limit,
        }
    }
}

/// Everything reported back for one solver run
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub solutions: Vec<Solution>,
    pub statistics: Statistics,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stderr: Option<String>,
}

impl Report {
    pub fn new(solutions: Vec<Solution>, limit: usize, took: Duration, stderr: &str) -> Report {
        let statistics = Statistics::new(solutions.len(), limit, took);
        let stderr = if stderr.trim().is_empty() {
            None
        } else {
            Some(String::from(stderr))
        };
        Report {
            solutions,
            statistics,
            stderr,
        }
    }
}

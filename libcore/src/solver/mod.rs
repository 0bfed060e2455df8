//! The seam to the external program that searches for solutions
//!
//! The search itself is opaque: it gets a [`Problem`] and answers with the text it printed.

use std::error;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

mod problem;
mod statistics;

pub use problem::*;
pub use statistics::*;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolverOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug)]
pub enum SolverError {
    NotFound(PathBuf),
    Spawn(std::io::Error),
    Io(std::io::Error),
    Timeout(Duration),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolverError::NotFound(path) => write!(f, "{} not found", path.display()),
            SolverError::Spawn(error) => write!(f, "Could not start solver: {}", error),
            SolverError::Io(error) => write!(f, "Communicating with solver: {}", error),
            SolverError::Timeout(timeout) => {
                write!(f, "timeout after {} ms", timeout.as_millis())
            }
        }
    }
}

impl error::Error for SolverError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SolverError::Spawn(error) | SolverError::Io(error) => Some(error),
            SolverError::NotFound(_) | SolverError::Timeout(_) => None,
        }
    }
}

pub trait Solver {
    /// Runs the search and returns what it printed, one candidate per line.
    fn solve(&self, problem: &Problem) -> Result<SolverOutput, SolverError>;
}

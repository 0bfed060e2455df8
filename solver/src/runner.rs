use points_core::io::solver_output::{extract_expressions, extract_infix};
use points_core::solver::{Problem, Report, Solver, SolverError};
use points_core::Solution;
use rayon::prelude::*;
use std::time::Instant;

/// Renders every expression, keeping the order of the input
pub fn render_all<S>(expressions: &[S]) -> Vec<Solution>
where
    S: AsRef<str> + Sync,
{
    expressions
        .par_iter()
        .map(|expression| Solution::new(expression.as_ref()))
        .collect()
}

pub fn extract(output: &str, target: i64, limit: Option<usize>) -> Vec<Solution> {
    render_all(&extract_infix(output, target, limit))
}

/// Every marked line as it is, without removing prompts or duplicates.
pub fn extract_raw(output: &str, target: i64, limit: Option<usize>) -> Vec<Solution> {
    let mut expressions = extract_expressions(output, target);
    if let Some(limit) = limit.filter(|limit| *limit > 0) {
        expressions.truncate(limit);
    }
    render_all(&expressions)
}

/// Asks the solver and collects what it found for `target`.
pub fn run(solver: &dyn Solver, problem: &Problem, target: i64) -> Result<Report, SolverError> {
    let begin = Instant::now();
    let output = solver.solve(problem)?;
    let solutions = extract(&output.stdout, target, Some(problem.limit));
    Ok(Report::new(
        solutions,
        problem.limit,
        begin.elapsed(),
        &output.stderr,
    ))
}

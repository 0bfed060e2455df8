use points_core::solver::{Problem, Solver, SolverError, SolverOutput};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;
use wait_timeout::ChildExt;

/// Runs the solver as a child process which reads the numbers from stdin
pub struct ProcessSolver {
    pub executable: PathBuf,
    pub timeout: Duration,
}

fn drain<R>(pipe: Option<R>) -> thread::JoinHandle<Vec<u8>>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buffer = vec![];
        if let Some(mut pipe) = pipe {
            // A pipe error only truncates what was printed so far
            pipe.read_to_end(&mut buffer).ok();
        }
        buffer
    })
}

impl ProcessSolver {
    pub fn new(executable: PathBuf, timeout: Duration) -> ProcessSolver {
        ProcessSolver {
            executable,
            timeout,
        }
    }
}

impl Solver for ProcessSolver {
    fn solve(&self, problem: &Problem) -> Result<SolverOutput, SolverError> {
        let executable = match self.executable.canonicalize() {
            Ok(path) if path.is_file() => path,
            _ => return Err(SolverError::NotFound(self.executable.clone())),
        };
        let mut command = Command::new(&executable);
        if let Some(folder) = executable.parent() {
            command.current_dir(folder);
        }
        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(SolverError::Spawn)?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        if let Some(mut stdin) = child.stdin.take() {
            let line = format!("{}\n", problem.input_line());
            if let Err(error) = stdin.write_all(line.as_bytes()) {
                child.kill().ok();
                child.wait().ok();
                return Err(SolverError::Io(error));
            }
        }

        if child
            .wait_timeout(self.timeout)
            .map_err(SolverError::Io)?
            .is_none()
        {
            child.kill().ok();
            child.wait().ok();
            return Err(SolverError::Timeout(self.timeout));
        }

        Ok(SolverOutput {
            stdout: String::from_utf8_lossy(&stdout.join().unwrap_or_default()).into_owned(),
            stderr: String::from_utf8_lossy(&stderr.join().unwrap_or_default()).into_owned(),
        })
    }
}

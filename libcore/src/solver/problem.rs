use std::error;
use std::fmt;

/// Bounds a request to the solver has to respect
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Limits {
    pub min_numbers: usize,
    pub max_numbers: usize,
    /// Largest absolute value of an input number
    pub max_abs_value: i64,
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            min_numbers: 2,
            max_numbers: 8,
            max_abs_value: 1000,
            default_limit: 200,
            max_limit: 1000,
        }
    }
}

impl Limits {
    /// The number of solutions to report when `requested` were asked for.
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        match requested {
            None => self.default_limit,
            Some(limit) => limit.min(self.max_limit),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ProblemError {
    TooFewNumbers { count: usize, min: usize },
    TooManyNumbers { count: usize, max: usize },
    OutOfRange { value: i64, max: i64 },
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProblemError::TooFewNumbers { count, min } => {
                write!(f, "Expected at least {} numbers, got {}", min, count)
            }
            ProblemError::TooManyNumbers { count, max } => {
                write!(f, "Expected at most {} numbers, got {}", max, count)
            }
            ProblemError::OutOfRange { value, max } => {
                write!(f, "Number {} is out of range [-{}, {}]", value, max, max)
            }
        }
    }
}

impl error::Error for ProblemError {}

/// The multiset of numbers handed to the solver and how many solutions to keep
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub numbers: Vec<i64>,
    pub limit: usize,
}

/// Integers separated by whitespace and commas, anything else is dropped.
pub fn parse_numbers(code: &str) -> Vec<i64> {
    code.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.parse::<i64>().ok())
        .collect()
}

impl Problem {
    pub fn new(
        numbers: Vec<i64>,
        limit: Option<usize>,
        limits: &Limits,
    ) -> Result<Problem, ProblemError> {
        let count = numbers.len();
        if count < limits.min_numbers {
            return Err(ProblemError::TooFewNumbers {
                count,
                min: limits.min_numbers,
            });
        }
        if count > limits.max_numbers {
            return Err(ProblemError::TooManyNumbers {
                count,
                max: limits.max_numbers,
            });
        }
        let range = -limits.max_abs_value..=limits.max_abs_value;
        if let Some(value) = numbers.iter().find(|value| !range.contains(*value)) {
            return Err(ProblemError::OutOfRange {
                value: *value,
                max: limits.max_abs_value,
            });
        }
        Ok(Problem {
            numbers,
            limit: limits.clamp_limit(limit),
        })
    }

    pub fn parse(
        code: &str,
        limit: Option<usize>,
        limits: &Limits,
    ) -> Result<Problem, ProblemError> {
        Problem::new(parse_numbers(code), limit, limits)
    }

    /// The numbers as the solver reads them from one line
    pub fn input_line(&self) -> String {
        self.numbers
            .iter()
            .map(i64::to_string)
            .collect::<Vec<String>>()
            .join(" ")
    }
}

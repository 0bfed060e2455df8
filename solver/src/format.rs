use points_core::solver::Report;
use points_core::Solution;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
    Yaml,
}

impl Format {
    pub const NAMES: [&'static str; 3] = ["text", "json", "yaml"];
}

impl Default for Format {
    fn default() -> Format {
        Format::Text
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(code: &str) -> Result<Format, String> {
        match code {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            _ => Err(format!("Unknown format {}", code)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "json"),
            Format::Yaml => write!(f, "yaml"),
        }
    }
}

fn dump_text(solutions: &[Solution]) -> String {
    solutions
        .iter()
        .enumerate()
        .map(|(i, solution)| format!("{:02}  {}  {}\n", i + 1, solution.infix, solution.latex))
        .collect()
}

fn serialize<T: serde::Serialize>(value: &T, format: Format) -> Result<String, String> {
    match format {
        Format::Json => serde_json::to_string_pretty(value)
            .map(|code| code + "\n")
            .map_err(|msg| msg.to_string()),
        Format::Yaml => serde_yaml::to_string(value).map_err(|msg| msg.to_string()),
        Format::Text => Err(String::from("Text is no serialization format")),
    }
}

pub fn dump_solutions(solutions: &[Solution], format: Format) -> Result<String, String> {
    match format {
        Format::Text => Ok(dump_text(solutions)),
        _ => serialize(&solutions, format),
    }
}

pub fn dump_report(report: &Report, format: Format) -> Result<String, String> {
    match format {
        Format::Text => {
            let statistics = &report.statistics;
            let mut text = dump_text(&report.solutions);
            text += &format!(
                "Found {} solutions in {} ms",
                statistics.count, statistics.took_ms
            );
            if statistics.truncated {
                text += &format!(" (stopped at limit {})", statistics.limit);
            }
            text.push('\n');
            Ok(text)
        }
        _ => serialize(report, format),
    }
}

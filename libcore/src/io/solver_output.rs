//! Reading candidate expressions out of the text a solver prints
//!
//! Every solution line looks like `[prompt]<infix> = <target>`.

use crate::dumper::infix_to_latex;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EXPRESSION_START: Regex =
        Regex::new(r"sqrt|lg|lb|log|[0-9(\-]").expect("expression start pattern");
}

/// An expression of the solver together with its LaTeX rendering
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub infix: String,
    pub latex: String,
}

impl Solution {
    pub fn new(infix: &str) -> Solution {
        Solution {
            infix: String::from(infix),
            latex: infix_to_latex(infix),
        }
    }
}

fn marker(target: i64) -> String {
    format!(" = {}", target)
}

/// The trimmed text in front of the last marker, if there is any.
///
/// A marker directly followed by a digit belongs to a different target.
fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.rmatch_indices(marker)
        .map(|(index, _)| index)
        .find(|index| {
            !line[index + marker.len()..].starts_with(|c: char| c.is_ascii_digit())
        })
        .filter(|index| *index > 0)
        .map(|index| line[..index].trim())
}

/// Removes what an interactive solver prints in front of an expression.
///
/// Drops a leading `>>>`, everything up to the last (full-width) colon and finally any text
/// before the first character that can start an expression.
pub fn strip_prompt(line: &str) -> &str {
    let mut cleaned = line.trim();
    if let Some(rest) = cleaned.strip_prefix(">>>") {
        cleaned = rest.trim_start();
    }
    let cut = cleaned
        .rfind('：')
        .map(|index| index + '：'.len_utf8())
        .max(cleaned.rfind(':').map(|index| index + 1));
    if let Some(cut) = cut {
        cleaned = cleaned[cut..].trim();
    }
    if let Some(start) = EXPRESSION_START.find(cleaned) {
        if start.start() > 0 {
            cleaned = cleaned[start.start()..].trim();
        }
    }
    cleaned
}

/// Expressions of every line carrying the marker, in order and without further cleaning.
pub fn extract_expressions(output: &str, target: i64) -> Vec<&str> {
    let marker = marker(target);
    output
        .lines()
        .map(str::trim)
        .filter_map(|line| strip_marker(line, &marker))
        .filter(|expression| !expression.is_empty())
        .collect()
}

/// Distinct expressions with prompts removed, at most `limit` of them.
///
/// A limit of zero means no limit.
pub fn extract_infix(output: &str, target: i64, limit: Option<usize>) -> Vec<&str> {
    let marker = marker(target);
    let expressions = output
        .lines()
        .filter_map(|line| strip_marker(line, &marker))
        .map(strip_prompt)
        .filter(|expression| !expression.is_empty())
        .unique();
    match limit.filter(|limit| *limit > 0) {
        Some(limit) => expressions.take(limit).collect(),
        None => expressions.collect(),
    }
}

use std::io::BufRead;

pub mod solver_output;

/// Reads one expression per line, skipping empty lines and `//` comments.
pub fn read_expressions<R>(reader: R) -> Result<Vec<String>, std::io::Error>
where
    R: BufRead,
{
    let mut expressions = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let code = line.split("//").next().unwrap_or("").trim();
        if !code.is_empty() {
            expressions.push(code.to_owned());
        }
    }
    Ok(expressions)
}

mod base;
pub mod latex;
pub mod plain;

pub use base::Precedence;
pub use latex::{dump_latex, escape_text, infix_to_latex, LaTeX};
pub use plain::dump_plain;

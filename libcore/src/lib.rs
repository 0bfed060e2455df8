//! Front end for 24-points solutions
//!
//! Solutions of the solver come as infix text. They are tokenized, parsed to a [`Symbol`] and
//! dumped as LaTeX with only those brackets that are needed.
//!
//! # Example
//!
//! ```latex
//! (1 + 3) * (2 + 4)
//! ```
//!
//! is dumped as
//!
//! ```latex
//! \left(1 + 3\right) \cdot \left(2 + 4\right)
//! ```

#[macro_use]
extern crate maplit;
#[macro_use]
extern crate serde_derive;

pub mod dumper;
pub mod io;
pub mod parser;
pub mod solver;
pub mod symbol;

pub use dumper::{dump_latex, dump_plain, infix_to_latex, LaTeX};
pub use io::solver_output::Solution;
pub use parser::token::Token;
pub use parser::{LexError, ParseError, SyntaxError};
pub use symbol::*;

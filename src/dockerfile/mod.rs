//! Dockerfile structural parsing.
//!
//! A Dockerfile is read as a flat list of [`DirectiveRecord`]s, one per
//! logical line. Continuation lines are joined, comments and blank lines are
//! dropped, and unrecognised keywords are kept as [`Instruction::Unknown`].

mod instruction;
mod lexer;
mod parser;

pub use instruction::{INSTRUCTIONS, Instruction, InstructionInfo};
pub use parser::{DirectiveNode, DirectiveRecord, DockerfileParse, parse, parse_directives};

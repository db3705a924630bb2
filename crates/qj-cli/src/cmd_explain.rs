use std::io::{IsTerminal, Write};

use anyhow::Result;
use qj_core::qj_warn;
use qj_lang::{CmpOp, CompiledQuery, Condition, PredicateChain, Segment};

const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[1;32m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

pub fn run(query: &str) -> Result<()> {
    let compiled = qj_lang::compile(query)?;
    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    explain(&compiled, &mut stdout.lock(), color)
}

/// Describe each compiled segment on its own line. Filter predicates are
/// parsed here, so a malformed predicate is reported inline rather than
/// failing the whole explanation.
pub fn explain(compiled: &CompiledQuery, out: &mut impl Write, color: bool) -> Result<()> {
    let p = Palette::new(color);
    let (bold, green, cyan, dim, reset) = (p.bold, p.green, p.cyan, p.dim, p.reset);
    writeln!(out, "{bold}Query:{reset} {green}{}{reset}", compiled.source())?;

    for (position, segment) in compiled.segments().iter().enumerate() {
        let kind = segment.kind();
        write!(out, "  {dim}{position}{reset} {cyan}{kind:<11}{reset} ")?;
        match segment {
            Segment::Field(name) => writeln!(out, "{name:?}")?,
            Segment::Index(index) => writeln!(out, "{index}")?,
            Segment::MultiField(fields) => writeln!(out, "{{{}}}", fields.join(", "))?,
            Segment::Filter { field, predicate } => {
                match field {
                    Some(name) => writeln!(out, "{name:?} [{}]", predicate.source())?,
                    None => writeln!(out, "<current> [{}]", predicate.source())?,
                }
                match predicate.chain() {
                    Ok(chain) => write_chain(out, chain, &p)?,
                    Err(e) => {
                        qj_warn!(pipe, position, error = %e, "filter predicate does not parse");
                        writeln!(out, "      {}error:{} {e}", p.red, p.reset)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn write_chain(out: &mut impl Write, chain: &PredicateChain, p: &Palette) -> Result<()> {
    let (dim, reset) = (p.dim, p.reset);
    writeln!(out, "      {dim}where{reset} {}", describe(chain.first()))?;
    for (connective, condition) in chain.rest() {
        let token = connective.token();
        writeln!(out, "      {dim}{token:>5}{reset} {}", describe(condition))?;
    }
    Ok(())
}

fn describe(condition: &Condition) -> String {
    if condition.op == CmpOp::Any {
        "any element".to_string()
    } else {
        condition.to_string()
    }
}

struct Palette {
    bold: &'static str,
    green: &'static str,
    cyan: &'static str,
    dim: &'static str,
    red: &'static str,
    reset: &'static str,
}

impl Palette {
    fn new(color: bool) -> Self {
        if color {
            Self {
                bold: BOLD,
                green: GREEN,
                cyan: CYAN,
                dim: DIM,
                red: RED,
                reset: RESET,
            }
        } else {
            Self {
                bold: "",
                green: "",
                cyan: "",
                dim: "",
                red: "",
                reset: "",
            }
        }
    }
}

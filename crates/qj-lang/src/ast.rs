use std::fmt;
use std::sync::OnceLock;

use crate::error::PredicateError;
use crate::predicate::parse_predicate;

// ---------------------------------------------------------------------------
// Comparison operators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Ge,
    Le,
    Eq,
    Gt,
    Lt,
    Ne,
    /// Wildcard `*`: matches every candidate.
    Any,
}

impl CmpOp {
    /// Operators in matching priority order. Two-character tokens come first
    /// so `>=` is never split as `>` followed by `=`.
    pub const PRIORITY: [CmpOp; 7] = [
        CmpOp::Ge,
        CmpOp::Le,
        CmpOp::Eq,
        CmpOp::Gt,
        CmpOp::Lt,
        CmpOp::Ne,
        CmpOp::Any,
    ];

    pub fn token(self) -> &'static str {
        match self {
            CmpOp::Ge => ">=",
            CmpOp::Le => "<=",
            CmpOp::Eq => "==",
            CmpOp::Gt => ">",
            CmpOp::Lt => "<",
            CmpOp::Ne => "!=",
            CmpOp::Any => "*",
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ---------------------------------------------------------------------------
// Logical connectives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    pub fn token(self) -> &'static str {
        match self {
            Connective::And => "&&",
            Connective::Or => "||",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// One atomic comparison, e.g. `age >= 18`.
///
/// For the wildcard operator both `key` and `value` are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub key: String,
    pub op: CmpOp,
    pub value: String,
}

impl Condition {
    pub fn wildcard() -> Self {
        Self {
            key: String::new(),
            op: CmpOp::Any,
            value: String::new(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            CmpOp::Any => f.write_str("*"),
            op => write!(f, "{} {} {}", self.key, op, self.value),
        }
    }
}

/// Conditions joined by connectives, evaluated as a strict left fold with no
/// precedence between `&&` and `||`.
///
/// `connectives.len() == conditions.len() - 1` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateChain {
    first: Condition,
    rest: Vec<(Connective, Condition)>,
}

impl PredicateChain {
    pub fn new(first: Condition) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    pub fn push(&mut self, connective: Connective, condition: Condition) {
        self.rest.push((connective, condition));
    }

    pub fn first(&self) -> &Condition {
        &self.first
    }

    /// `(connective, condition)` pairs following the first condition.
    pub fn rest(&self) -> &[(Connective, Condition)] {
        &self.rest
    }

    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        std::iter::once(&self.first).chain(self.rest.iter().map(|(_, c)| c))
    }

    pub fn connectives(&self) -> impl Iterator<Item = Connective> + '_ {
        self.rest.iter().map(|(c, _)| *c)
    }

    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// A chain always holds at least one condition.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for PredicateChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (conn, cond) in &self.rest {
            write!(f, " {conn} {cond}")?;
        }
        Ok(())
    }
}

/// Raw filter text plus its lazily parsed chain.
///
/// Parsing happens the first time the owning segment is executed and the
/// outcome (including a parse error) is cached for every later document.
pub struct Predicate {
    source: String,
    parsed: OnceLock<Result<PredicateChain, PredicateError>>,
}

impl Predicate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            parsed: OnceLock::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse on first use; later calls return the cached result.
    pub fn chain(&self) -> Result<&PredicateChain, PredicateError> {
        self.parsed
            .get_or_init(|| parse_predicate(&self.source))
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed.get().is_some()
    }
}

impl Clone for Predicate {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            parsed: self.parsed.clone(),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.source).finish()
    }
}

// Equality is on source text only; the cache is an execution detail.
impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Predicate {}

// ---------------------------------------------------------------------------
// Segments
// ---------------------------------------------------------------------------

/// One compiled step of a dotted query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain property access, e.g. `name`.
    Field(String),
    /// Positional array access, e.g. `0`.
    Index(usize),
    /// Projection of several properties, e.g. `{id,name}`.
    MultiField(Vec<String>),
    /// Array narrowing, e.g. `items[price>10]` or a leading `[age>=18]`.
    Filter {
        field: Option<String>,
        predicate: Predicate,
    },
}

impl Segment {
    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Field(_) => "field",
            Segment::Index(_) => "index",
            Segment::MultiField(_) => "multi-field",
            Segment::Filter { .. } => "filter",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => f.write_str(name),
            Segment::Index(i) => write!(f, "{i}"),
            Segment::MultiField(fields) => write!(f, "{{{}}}", fields.join(",")),
            Segment::Filter { field, predicate } => write!(
                f,
                "{}[{}]",
                field.as_deref().unwrap_or(""),
                predicate.source()
            ),
        }
    }
}

/// A compiled query: the source text and its non-empty segment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    source: String,
    segments: Vec<Segment>,
}

impl CompiledQuery {
    pub(crate) fn new(source: String, segments: Vec<Segment>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { source, segments }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

//! `qjson` block text: `#qj-*` directive lines plus an optional inline JSON
//! body.
//!
//! ```text
//! #qj-id: 7
//! #qj-id-desc: Team roster
//! {"members": [{"name": "Ada"}]}
//! ```
//!
//! Recognised directives:
//!
//! | directive            | meaning                                        |
//! |----------------------|------------------------------------------------|
//! | `#qj-id: <digits>`   | block id (required)                            |
//! | `#qj-id-desc: <txt>` | header description                             |
//! | `#qj-id-ds`          | suppress the header                            |
//! | `#qj-file: <path>`   | load the document from a file, not the body    |

use winnow::combinator::alt;
use winnow::error::{StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::literal;

use crate::error::BlockError;
use crate::parse_utils::{kw, labelled_value, nonneg_integer, rest_of_line};


/// Header text used when a block carries no `#qj-id-desc`.
pub const DEFAULT_DESCRIPTION: &str = "»»» Query JSON «««";

/// A parsed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: u64,
    pub description: Option<String>,
    pub show_header: bool,
    /// Path from `#qj-file`, unresolved.
    pub file: Option<String>,
    /// Non-directive lines, joined with `\n`.
    pub body: String,
}

impl Block {
    pub fn header_description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive<'a> {
    Id(&'a str),
    Desc(&'a str),
    SuppressHeader,
    File(&'a str),
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Split block text into directives and body. The first occurrence of a
/// directive wins when it is repeated.
pub fn parse_block(source: &str) -> Result<Block, BlockError> {
    let mut id: Option<&str> = None;
    let mut description: Option<&str> = None;
    let mut show_header = true;
    let mut file: Option<&str> = None;
    let mut body = Vec::new();

    for line in source.lines() {
        let trimmed = line.trim();
        if !trimmed.starts_with("#qj-") {
            body.push(line);
            continue;
        }
        let parsed = directive.parse(trimmed).map_err(|e| BlockError::Syntax {
            message: e.to_string(),
        })?;
        match parsed {
            Directive::Id(v) => {
                id.get_or_insert(v);
            }
            Directive::Desc(v) if !v.is_empty() => {
                description.get_or_insert(v);
            }
            Directive::Desc(_) => {}
            Directive::SuppressHeader => show_header = false,
            Directive::File(v) => {
                file.get_or_insert(v);
            }
        }
    }

    let id_text = id.ok_or(BlockError::MissingId)?;
    let id = nonneg_integer
        .parse(id_text)
        .map_err(|_| BlockError::InvalidId {
            found: id_text.to_string(),
        })?;

    Ok(Block {
        id,
        description: description.map(str::to_string),
        show_header,
        file: file.filter(|f| !f.is_empty()).map(str::to_string),
        body: body.join("\n"),
    })
}

// ---------------------------------------------------------------------------
// Directive grammar
// ---------------------------------------------------------------------------

fn directive<'a>(input: &mut &'a str) -> ModalResult<Directive<'a>> {
    literal("#qj-").parse_next(input)?;
    alt((
        labelled_value("id-desc").map(Directive::Desc),
        (kw("id-ds"), rest_of_line).map(|_| Directive::SuppressHeader),
        labelled_value("id").map(Directive::Id),
        labelled_value("file").map(Directive::File),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "directive (id, id-desc, id-ds, file)",
    )))
    .parse_next(input)
}

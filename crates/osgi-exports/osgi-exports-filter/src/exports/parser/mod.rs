//! Export-Package header parser.
//!
//! ```text
//! Export-Package ::= export ( ',' export )*
//! export         ::= package-names ( ';' parameter )*
//! package-names  ::= package-name ( ';' package-name )*
//! parameter      ::= directive | attribute
//! directive      ::= extended ':=' argument
//! attribute      ::= extended '=' argument
//! argument       ::= extended | quoted-string
//! ```
//!
//! Only the `include` and `exclude` directives are kept. Their values are
//! comma separated class name globs where `*` is the only special character.
//! Other directives and all attributes are consumed and dropped.

mod context;
mod state;

use osgi_exports_core::{FxHashSet, ParseError};

use self::context::Context;
use self::state::ParserState;
use super::definition::ExportDefinition;

/// Parse an Export-Package header value into `output`, one definition per clause.
///
/// `None` and the empty string add nothing. On error, definitions of the
/// clauses completed before the offending character stay in `output`.
pub fn parse(
    directive: Option<&str>,
    output: &mut FxHashSet<ExportDefinition>,
) -> Result<(), ParseError> {
    let input = directive.unwrap_or_default();
    let mut ctx = Context::new(input, output);
    let mut state = ParserState::Export;
    let mut length = 0;

    for (index, c) in input.chars().enumerate() {
        ctx.set_position(index);
        state = state.next(c, &mut ctx)?;
        if state == ParserState::Error {
            return Err(ctx.unexpected_character());
        }
        length = index + 1;
    }

    ctx.set_position(length);
    state.finish(&mut ctx)
}

/// Parse a header into a fresh set.
pub fn parse_header(header: &str) -> Result<FxHashSet<ExportDefinition>, ParseError> {
    let mut definitions = FxHashSet::default();
    parse(Some(header), &mut definitions)?;
    Ok(definitions)
}

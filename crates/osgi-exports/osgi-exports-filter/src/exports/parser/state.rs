//! The parser automaton: one state per position in the grammar.

use osgi_exports_core::ParseError;

use super::context::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParserState {
    /// Start of a clause, or after `;` while package names are still expected.
    Export,
    Package,
    /// After a directive value; reading the next parameter name.
    Parameter,
    /// Seen `name:`, expecting `=`.
    MaybeDirectiveValue,
    DirectiveValueStart,
    DirectiveValue,
    DirectiveValueInQuotes,
    DirectiveValueInQuotesEscape,
    /// A quoted value just closed; only `;` or `,` may follow.
    ExpectDirectiveValueEnd,
    SkipParameter,
    SkipParameterInQuotes,
    SkipInQuotesAfterEscape,
    Error,
}

impl ParserState {
    /// Consume one character. Returns `Error` for a character the grammar
    /// does not allow here; `Err` only when a finished clause fails to compile.
    pub(super) fn next(self, c: char, ctx: &mut Context<'_>) -> Result<Self, ParseError> {
        use ParserState::*;

        let next = match self {
            Export => {
                if is_identifier_start(c) {
                    ctx.accumulate(c);
                    Package
                } else if c.is_whitespace() {
                    Export
                } else {
                    Error
                }
            }
            Package => match c {
                '.' => {
                    ctx.accumulate(c);
                    Package
                }
                ';' => {
                    ctx.package_done();
                    Export
                }
                ',' => {
                    ctx.package_done();
                    ctx.export_done()?;
                    Export
                }
                ':' => MaybeDirectiveValue,
                '=' => {
                    // an attribute name, not a package
                    ctx.clear_accumulator();
                    SkipParameter
                }
                c if is_identifier_part(c) => {
                    ctx.accumulate(c);
                    Package
                }
                _ => Error,
            },
            Parameter => match c {
                ':' => MaybeDirectiveValue,
                '=' => {
                    ctx.clear_accumulator();
                    SkipParameter
                }
                ',' => {
                    ctx.export_done()?;
                    Export
                }
                _ => {
                    ctx.accumulate(c);
                    Parameter
                }
            },
            MaybeDirectiveValue => {
                if c == '=' {
                    ctx.directive_name_done();
                    DirectiveValueStart
                } else {
                    Error
                }
            }
            DirectiveValueStart => match c {
                '"' => DirectiveValueInQuotes,
                _ => {
                    ctx.accumulate(c);
                    DirectiveValue
                }
            },
            DirectiveValue => match c {
                ';' => {
                    ctx.directive_value_done();
                    Parameter
                }
                ',' => {
                    ctx.directive_value_done();
                    ctx.export_done()?;
                    Export
                }
                _ => {
                    ctx.accumulate(c);
                    DirectiveValue
                }
            },
            DirectiveValueInQuotes => match c {
                '\\' => DirectiveValueInQuotesEscape,
                '"' => {
                    ctx.directive_value_done();
                    ExpectDirectiveValueEnd
                }
                _ => {
                    ctx.accumulate(c);
                    DirectiveValueInQuotes
                }
            },
            DirectiveValueInQuotesEscape => {
                ctx.accumulate(c);
                DirectiveValueInQuotes
            }
            ExpectDirectiveValueEnd => match c {
                ';' => Parameter,
                ',' => {
                    ctx.export_done()?;
                    Export
                }
                _ => Error,
            },
            SkipParameter => match c {
                ';' => Parameter,
                ',' => {
                    ctx.export_done()?;
                    Export
                }
                '"' => SkipParameterInQuotes,
                _ => SkipParameter,
            },
            SkipParameterInQuotes => match c {
                '\\' => SkipInQuotesAfterEscape,
                '"' => ExpectDirectiveValueEnd,
                _ => SkipParameterInQuotes,
            },
            SkipInQuotesAfterEscape => SkipParameterInQuotes,
            Error => Error,
        };

        Ok(next)
    }

    /// Flush whatever is still open at end of input, exactly once.
    pub(super) fn finish(self, ctx: &mut Context<'_>) -> Result<(), ParseError> {
        use ParserState::*;

        match self {
            Export | Parameter | SkipParameter | ExpectDirectiveValueEnd => ctx.export_done(),
            Package => {
                ctx.package_done();
                ctx.export_done()
            }
            DirectiveValueStart | DirectiveValue => {
                ctx.directive_value_done();
                ctx.export_done()
            }
            MaybeDirectiveValue
            | DirectiveValueInQuotes
            | DirectiveValueInQuotesEscape
            | SkipParameterInQuotes
            | SkipInQuotesAfterEscape => Err(ctx.unexpected_end()),
            Error => Err(ctx.unexpected_character()),
        }
    }
}

/// First character of a package name segment: letters, `_` and `$`.
fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_numeric()
}

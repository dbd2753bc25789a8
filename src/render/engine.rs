use crate::error::{Result, StencilError};
use crate::render::vars::VariableMapping;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

enum Piece<'a> {
    Literal(&'a str),
    Token(&'a str),
}

/// Render a template body against the variable mapping.
///
/// Substitution is single-pass and non-recursive: substituted values are never
/// re-scanned, so rendering always terminates in time linear in the template
/// length. Any unknown or malformed token aborts the whole render; no partial
/// output is produced. `context` names the file or path for diagnostics.
pub fn render(template: &str, vars: &VariableMapping, context: &str) -> Result<String> {
    let pieces = scan(template, context)?;

    let mut out = String::with_capacity(template.len());
    for piece in pieces {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Token(name) => match vars.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    return Err(StencilError::UnresolvedPlaceholder {
                        token: name.to_string(),
                        context: context.to_string(),
                    })
                }
            },
        }
    }

    Ok(out)
}

/// Collect the token names a template consumes, without substituting.
///
/// Used at registration time to validate a template against the recognized
/// vocabulary before any request touches it.
pub fn collect_tokens(template: &str, context: &str) -> Result<Vec<String>> {
    let pieces = scan(template, context)?;
    Ok(pieces
        .into_iter()
        .filter_map(|p| match p {
            Piece::Token(name) => Some(name.to_string()),
            Piece::Literal(_) => None,
        })
        .collect())
}

/// Split a template into literal runs and placeholder tokens.
///
/// Delimiter markers that do not form a well-formed token (an unmatched `{{`,
/// a stray `}}`, or garbage between the braces) are surfaced as unresolved
/// placeholders rather than passed through.
fn scan<'a>(template: &'a str, context: &str) -> Result<Vec<Piece<'a>>> {
    let mut pieces = Vec::new();
    let mut rest = template;

    loop {
        let open = rest.find(OPEN);
        let close = rest.find(CLOSE);

        match (open, close) {
            (None, None) => {
                if !rest.is_empty() {
                    pieces.push(Piece::Literal(rest));
                }
                return Ok(pieces);
            }
            // A `}}` with no opener before it.
            (None, Some(_)) => {
                return Err(StencilError::UnresolvedPlaceholder {
                    token: CLOSE.to_string(),
                    context: context.to_string(),
                });
            }
            (Some(o), close) => {
                if let Some(c) = close {
                    if c < o {
                        return Err(StencilError::UnresolvedPlaceholder {
                            token: CLOSE.to_string(),
                            context: context.to_string(),
                        });
                    }
                }

                if o > 0 {
                    pieces.push(Piece::Literal(&rest[..o]));
                }
                rest = &rest[o..];

                let Some(end) = rest.find(CLOSE) else {
                    return Err(StencilError::UnresolvedPlaceholder {
                        token: OPEN.to_string(),
                        context: context.to_string(),
                    });
                };

                let raw = &rest[..end + CLOSE.len()];
                let inner = &rest[OPEN.len()..end];
                let name = parse_token_name(inner).ok_or_else(|| {
                    StencilError::UnresolvedPlaceholder {
                        token: raw.to_string(),
                        context: context.to_string(),
                    }
                })?;

                pieces.push(Piece::Token(name));
                rest = &rest[end + CLOSE.len()..];
            }
        }
    }
}

/// A token name allows at most one space of padding on each side and the
/// identifier characters the vocabulary uses. Anything else is malformed.
fn parse_token_name(inner: &str) -> Option<&str> {
    let name = inner.strip_prefix(' ').unwrap_or(inner);
    let name = name.strip_suffix(' ').unwrap_or(name);

    if name.is_empty() || name.starts_with(' ') || name.ends_with(' ') {
        return None;
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return None;
    }
    Some(name)
}

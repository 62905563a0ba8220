use nom::{
    branch::alt,
    bytes::complete::{take_till, take_until},
    character::complete::char,
    combinator::rest,
    sequence::preceded,
    IResult, Parser,
};
use nom_language::error::VerboseError;

use crate::types::{Error, PathToken};

type Res<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// The segment that anchors a path at the current node (the document root
/// when used as the first segment).
const ANCHOR: &str = "x";

/// Tokenizes a path expression into typed segments.
///
/// The grammar consumes one dot-delimited segment at a time, left to right:
///
/// * `x` — the root/no-op anchor, [`PathToken::Anchor`].
/// * `name[idx]` — a key (or anchor, if `name` is `x`) followed by one
///   bracketed non-negative integer index. Only the first bracket group of a
///   segment is consumed; anything after its closing `]` is ignored, so
///   chained indices like `a[0][1]` are not supported and must be written as
///   separate segments of indexed keys instead.
/// * `name` — a bare key, valid only as the final segment. A bare key with
///   trailing path text fails with [`Error::UnparsedRemainder`].
///
/// ## Arguments
///
/// * `path` - The path expression, e.g. `x.books[0].author`
///
/// ## Returns
///
/// Returns the token sequence, or the first [`Error`] encountered while
/// scanning left to right.
///
/// ## Example
///
/// ```rust
/// use jsonfile::{tokenize, PathToken};
///
/// let tokens = tokenize("x.books[0].author").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         PathToken::Anchor,
///         PathToken::Key("books".to_string()),
///         PathToken::Index(0),
///         PathToken::Key("author".to_string()),
///     ]
/// );
/// ```
pub fn tokenize(path: &str) -> Result<Vec<PathToken>, Error> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }

    let mut tokens = Vec::new();
    let mut remaining = path;
    loop {
        let (piece, tail) = match remaining.split_once('.') {
            Some((piece, tail)) => (piece, tail),
            None => (remaining, ""),
        };

        if piece == ANCHOR {
            tokens.push(PathToken::Anchor);
        } else if piece.contains('[') && piece.contains(']') {
            let (name, index_text) = indexed_parts(piece)
                .map(|(_, parts)| parts)
                .map_err(|_| Error::InvalidIndex {
                    text: piece.to_string(),
                })?;
            let index: usize = index_text.parse().map_err(|_| Error::InvalidIndex {
                text: index_text.to_string(),
            })?;
            if name == ANCHOR {
                tokens.push(PathToken::Anchor);
            } else {
                tokens.push(PathToken::Key(name.to_string()));
            }
            tokens.push(PathToken::Index(index));
        } else if tail.is_empty() {
            // Terminal bare key.
            tokens.push(PathToken::Key(piece.to_string()));
        } else {
            return Err(Error::UnparsedRemainder {
                remainder: tail.to_string(),
            });
        }

        if tail.is_empty() {
            break;
        }
        remaining = tail;
    }

    Ok(tokens)
}

/// Splits an indexed segment like `books[12]` into `("books", "12")`.
///
/// The index text runs to the first `]`, or to the end of the segment if no
/// `]` follows the `[`. The caller validates that the text is an integer.
fn indexed_parts(piece: &str) -> Res<'_, (&str, &str)> {
    (
        take_till(|c| c == '['),
        preceded(char('['), alt((take_until("]"), rest))),
    )
        .parse(piece)
}

use std::fmt::{self, Debug, Display};

/// Error that can occur when parsing, merging, or loading TOML.
#[derive(Debug, Clone)]
pub struct Error {
    /// The error kind
    pub kind: ErrorKind,
    /// 1-based line and column where the failure was detected, only available
    /// for errors coming from the parser
    pub line_info: Option<(usize, usize)>,
}

impl std::error::Error for Error {}

impl Error {
    pub(crate) fn new(kind: ErrorKind, line: usize, col: usize) -> Self {
        Self {
            kind,
            line_info: Some((line, col)),
        }
    }

    pub(crate) fn without_position(kind: ErrorKind) -> Self {
        Self {
            kind,
            line_info: None,
        }
    }

    /// Returns the 1-based line number the error was detected on, if known.
    pub fn line(&self) -> Option<usize> {
        self.line_info.map(|(line, _)| line)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::without_position(ErrorKind::Io(err.to_string()))
    }
}

/// Errors that can occur when processing a TOML document.
#[derive(Clone, PartialEq)]
pub enum ErrorKind {
    /// The end of a line or of the input was reached while a construct was
    /// still incomplete.
    UnexpectedEnd,

    /// A table header contained an empty dotted component, e.g. `[a..b]`.
    EmptyTableName,

    /// A previously defined table was opened again by a `[header]`.
    TableRedefined(String),

    /// A header or merge path ran into an existing entry of the wrong shape.
    KeyConflict(String),

    /// The same key was assigned twice within one table.
    DuplicateKey(String),

    /// A bare key was empty or contained a forbidden character.
    MalformedKey(String),

    /// A number failed to parse, including integer overflow and misplaced
    /// `_` separators.
    MalformedNumber,

    /// A datetime did not match the fixed-width RFC 3339 subset.
    MalformedDate,

    /// A boolean was not exactly `true` or `false`.
    MalformedBool,

    /// An unsupported character followed `\` in a basic string.
    BadEscape(char),

    /// A string ran past the end of its line (or input, for multi-line forms).
    UnterminatedString,

    /// The input ended before an array's closing `]`.
    UnterminatedArray,

    /// An array element did not match the type set by the first element.
    HeterogeneousArray,

    /// An inline table ran past the end of its line without a closing `}`.
    UnterminatedInlineTable,

    /// Non-comment characters followed a complete value or header.
    TrailingGarbage(char),

    /// An unexpected character was encountered, typically when looking for a
    /// value.
    Unexpected(char),

    /// Arrays or inline tables were nested past the supported depth.
    RecursionLimit,

    /// An override document could not be merged onto its base.
    MergeConflict(String),

    /// Opening or reading the input failed.
    Io(String),
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::UnexpectedEnd => "unexpected-end",
            Self::EmptyTableName => "empty-table-name",
            Self::TableRedefined(..) => "table-redefined",
            Self::KeyConflict(..) => "key-conflict",
            Self::DuplicateKey(..) => "key-duplicate",
            Self::MalformedKey(..) => "malformed-key",
            Self::MalformedNumber => "malformed-number",
            Self::MalformedDate => "malformed-date",
            Self::MalformedBool => "malformed-bool",
            Self::BadEscape(..) => "bad-escape",
            Self::UnterminatedString => "string-unterminated",
            Self::UnterminatedArray => "array-unterminated",
            Self::HeterogeneousArray => "array-heterogeneous",
            Self::UnterminatedInlineTable => "inline-table-unterminated",
            Self::TrailingGarbage(..) => "trailing-garbage",
            Self::Unexpected(..) => "unexpected",
            Self::RecursionLimit => "recursion-limit",
            Self::MergeConflict(..) => "merge-conflict",
            Self::Io(..) => "io",
        };
        f.write_str(text)
    }
}

impl Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::UnexpectedEnd => f.write_str("unexpected end of input")?,
            ErrorKind::EmptyTableName => {
                f.write_str("table name cannot have an empty component")?;
            }
            ErrorKind::TableRedefined(name) => {
                write!(f, "redefinition of table `{name}`")?;
            }
            ErrorKind::KeyConflict(path) => {
                write!(f, "key `{path}` already exists with a conflicting type")?;
            }
            ErrorKind::DuplicateKey(key) => write!(f, "key `{key}` is already present")?,
            ErrorKind::MalformedKey(key) => write!(f, "malformed bare key `{key}`")?,
            ErrorKind::MalformedNumber => f.write_str("malformed number")?,
            ErrorKind::MalformedDate => f.write_str("malformed date")?,
            ErrorKind::MalformedBool => {
                f.write_str("malformed boolean, expected `true` or `false`")?;
            }
            ErrorKind::BadEscape(c) => {
                write!(f, "invalid escape character `{}` in string", c.escape_default())?;
            }
            ErrorKind::UnterminatedString => f.write_str("unterminated string")?,
            ErrorKind::UnterminatedArray => f.write_str("unterminated array")?,
            ErrorKind::HeterogeneousArray => {
                f.write_str("array elements must all share the type of the first element")?;
            }
            ErrorKind::UnterminatedInlineTable => f.write_str("unterminated inline table")?,
            ErrorKind::TrailingGarbage(c) => {
                write!(
                    f,
                    "unexpected trailing character `{}`, expected a comment or end of line",
                    c.escape_default()
                )?;
            }
            ErrorKind::Unexpected(c) => {
                write!(f, "unexpected character `{}`", c.escape_default())?;
            }
            ErrorKind::RecursionLimit => f.write_str("maximum nesting depth exceeded")?,
            ErrorKind::MergeConflict(key) => {
                write!(f, "cannot merge override key `{key}` into base")?;
            }
            ErrorKind::Io(message) => f.write_str(message)?,
        }
        if let Some((line, col)) = self.line_info {
            write!(f, " at line {line}, column {col}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "./error_tests.rs"]
mod tests;

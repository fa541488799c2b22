#[cfg(test)]
#[path = "./parser_tests.rs"]
mod tests;

use crate::array::{Array, TableArray};
use crate::error::{Error, ErrorKind};
use crate::table::Table;
use crate::time::DateTime;
use crate::value::Value;
use std::io::BufRead;

const MAX_RECURSION_DEPTH: i16 = 256;

/// Parses a TOML document from a buffered reader.
///
/// Lines are read eagerly until end of input; the first error aborts the
/// parse and any partially built tree is discarded. The returned root table
/// owns the whole tree.
pub fn parse<R: BufRead>(reader: R) -> Result<Table, Error> {
    Parser::new(reader).parse_document()
}

/// Parses a TOML document held in memory.
pub fn parse_str(input: &str) -> Result<Table, Error> {
    parse(input.as_bytes())
}

/// Line-oriented cursor over the input stream.
///
/// `line` holds the current physical line with its terminator stripped and
/// `pos` is a byte offset into it. Multi-line constructs (triple-quoted
/// strings, arrays) pull further lines themselves via [`Self::next_line`].
struct Parser<R> {
    input: R,
    line: String,
    pos: usize,
    /// 1-based number of the line currently in the buffer.
    line_number: usize,
}

impl<R: BufRead> Parser<R> {
    fn new(input: R) -> Self {
        Parser {
            input,
            line: String::new(),
            pos: 0,
            line_number: 0,
        }
    }

    /// Reads the next physical line into the buffer. Returns `false` at end
    /// of input.
    fn next_line(&mut self) -> Result<bool, Error> {
        self.line.clear();
        self.pos = 0;
        let read = match self.input.read_line(&mut self.line) {
            Ok(n) => n,
            Err(e) => {
                return Err(Error::new(
                    ErrorKind::Io(e.to_string()),
                    self.line_number + 1,
                    1,
                ));
            }
        };
        if read == 0 {
            return Ok(false);
        }
        if self.line.ends_with('\n') {
            self.line.pop();
            if self.line.ends_with('\r') {
                self.line.pop();
            }
        }
        self.line_number += 1;
        if self.line_number == 1 && self.line.starts_with('\u{feff}') {
            self.pos = '\u{feff}'.len_utf8();
        }
        Ok(true)
    }

    fn err(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.line_number.max(1), self.pos + 1)
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.line.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.line.as_bytes().get(self.pos + offset).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.line.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    #[inline]
    fn at_eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    #[inline]
    fn eat_byte(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_byte(&mut self, byte: u8) -> Result<(), Error> {
        if self.eat_byte(byte) {
            Ok(())
        } else {
            Err(self.unexpected_here())
        }
    }

    fn unexpected_here(&self) -> Error {
        match self.peek_char() {
            Some(c) => self.err(ErrorKind::Unexpected(c)),
            None => self.err(ErrorKind::UnexpectedEnd),
        }
    }

    /// Advances past spaces and tabs.
    fn eat_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
    }

    /// Asserts that the rest of the line is blank or a comment.
    fn eol_or_comment(&mut self) -> Result<(), Error> {
        self.eat_whitespace();
        match self.peek_char() {
            None | Some('#') => Ok(()),
            Some(c) => Err(self.err(ErrorKind::TrailingGarbage(c))),
        }
    }

    /// Lookahead: first position past the characters a datetime may contain.
    fn find_end_of_date(&self) -> usize {
        let bytes = self.line.as_bytes();
        let mut at = self.pos;
        while at < bytes.len()
            && matches!(
                bytes[at],
                b'0'..=b'9' | b'T' | b't' | b'Z' | b'z' | b':' | b'-' | b'+' | b'.'
            )
        {
            at += 1;
        }
        at
    }

    /// Shape test only; the real validation happens in
    /// [`DateTime::from_rfc3339`].
    fn looks_like_datetime(candidate: &str) -> bool {
        let b = candidate.as_bytes();
        b.len() >= 20
            && b[4] == b'-'
            && b[7] == b'-'
            && b[10] == b'T'
            && b[13] == b':'
            && b[16] == b':'
    }

    // ---- document structure ----------------------------------------------

    fn parse_document(&mut self) -> Result<Table, Error> {
        let mut root = Table::new();
        // The current table is kept as a key path into the root and
        // re-resolved per line, rather than as a pointer into the tree.
        let mut current: Vec<String> = Vec::new();
        while self.next_line()? {
            self.eat_whitespace();
            match self.peek() {
                None | Some(b'#') => continue,
                Some(b'[') => {
                    current = self.parse_header(&mut root)?;
                }
                Some(_) => {
                    let table = resolve_path(&mut root, &current);
                    self.parse_key_value(table, MAX_RECURSION_DEPTH)?;
                    self.eol_or_comment()?;
                }
            }
        }
        Ok(root)
    }

    /// Parses `[a.b.c]` or `[[a.b.c]]` and applies it to the tree. Returns
    /// the key path of the table that becomes current.
    fn parse_header(&mut self, root: &mut Table) -> Result<Vec<String>, Error> {
        self.pos += 1; // '['
        let is_array = self.eat_byte(b'[');

        let mut parts = Vec::new();
        loop {
            self.eat_whitespace();
            let part = self.parse_key(&[b'.', b']'])?;
            if part.is_empty() {
                return Err(self.err(ErrorKind::EmptyTableName));
            }
            parts.push(part);
            self.eat_whitespace();
            match self.peek() {
                Some(b'.') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(self.unexpected_here()),
            }
        }
        if is_array {
            self.expect_byte(b']')?;
        }
        self.eol_or_comment()?;

        if is_array {
            self.open_table_array(root, parts)
        } else {
            self.open_table(root, parts)
        }
    }

    /// Walks an intermediate header segment: descend into an existing table,
    /// into the last element of an existing table array, or create an
    /// implicit table.
    fn descend<'t>(
        &self,
        table: &'t mut Table,
        part: &str,
        path: &[String],
    ) -> Result<&'t mut Table, Error> {
        match table.entry_or_insert_table(part) {
            Value::Table(sub) => Ok(sub),
            Value::TableArray(array) => match array.last_mut() {
                Some(last) => Ok(last),
                // table arrays gain their first element on creation
                None => Err(self.err(ErrorKind::KeyConflict(path.join(".")))),
            },
            _ => Err(self.err(ErrorKind::KeyConflict(path.join(".")))),
        }
    }

    fn open_table(&self, root: &mut Table, parts: Vec<String>) -> Result<Vec<String>, Error> {
        let mut table = &mut *root;
        let last = parts.len() - 1;
        for i in 0..last {
            table = self.descend(table, &parts[i], &parts[..=i])?;
        }
        match table.entry_or_insert_table(&parts[last]) {
            Value::Table(existing) => {
                // A table reachable here was either just created or defined
                // only implicitly by deeper headers; a table that already
                // holds its own assignments must not be reopened.
                if existing.has_direct_values() {
                    return Err(self.err(ErrorKind::TableRedefined(parts.join("."))));
                }
            }
            _ => return Err(self.err(ErrorKind::KeyConflict(parts.join(".")))),
        }
        Ok(parts)
    }

    fn open_table_array(
        &self,
        root: &mut Table,
        parts: Vec<String>,
    ) -> Result<Vec<String>, Error> {
        let mut table = &mut *root;
        let last = parts.len() - 1;
        for i in 0..last {
            table = self.descend(table, &parts[i], &parts[..=i])?;
        }
        match table.entry_or_insert_table_array(&parts[last]) {
            Value::TableArray(array) => array.push(Table::new()),
            _ => return Err(self.err(ErrorKind::KeyConflict(parts.join(".")))),
        }
        Ok(parts)
    }

    /// Parses one `key = value` assignment into `table`.
    fn parse_key_value(&mut self, table: &mut Table, depth_remaining: i16) -> Result<(), Error> {
        let key = self.parse_key(&[b'='])?;
        if key.is_empty() {
            return Err(self.err(ErrorKind::MalformedKey(key)));
        }
        if table.contains_key(&key) {
            return Err(self.err(ErrorKind::DuplicateKey(key)));
        }
        self.eat_whitespace();
        self.expect_byte(b'=')?;
        self.eat_whitespace();
        let value = self.parse_value(depth_remaining)?;
        table.insert(key, value);
        Ok(())
    }

    /// Parses a bare or quoted key. `stops` lists the bytes that terminate a
    /// bare key in the caller's context; trailing whitespace is trimmed.
    fn parse_key(&mut self, stops: &[u8]) -> Result<String, Error> {
        self.eat_whitespace();
        if self.peek() == Some(b'"') {
            self.pos += 1;
            return self.parse_string_in_line(b'"');
        }
        let start = self.pos;
        let bytes = self.line.as_bytes();
        let mut at = start;
        while at < bytes.len() && !stops.contains(&bytes[at]) {
            at += 1;
        }
        let mut end = at;
        while end > start && matches!(bytes[end - 1], b' ' | b'\t') {
            end -= 1;
        }
        let key = &self.line[start..end];
        if key
            .bytes()
            .any(|b| matches!(b, b' ' | b'\t' | b'#' | b'[' | b']'))
        {
            return Err(self.err(ErrorKind::MalformedKey(key.to_string())));
        }
        let key = key.to_string();
        self.pos = at;
        Ok(key)
    }

    // ---- values ----------------------------------------------------------

    /// Parses one value, dispatching on its first character.
    fn parse_value(&mut self, depth_remaining: i16) -> Result<Value, Error> {
        if depth_remaining < 0 {
            return Err(self.err(ErrorKind::RecursionLimit));
        }
        let Some(byte) = self.peek() else {
            return Err(self.err(ErrorKind::UnexpectedEnd));
        };
        match byte {
            b'"' | b'\'' => self.parse_string(byte).map(Value::String),
            b'[' => self.parse_array(depth_remaining - 1),
            b'{' => self
                .parse_inline_table(depth_remaining - 1)
                .map(Value::Table),
            b't' | b'f' => self.parse_bool(),
            b'0'..=b'9' | b'+' | b'-' => {
                let end = self.find_end_of_date();
                if Self::looks_like_datetime(&self.line[self.pos..end]) {
                    self.parse_datetime()
                } else {
                    self.parse_number()
                }
            }
            _ => Err(self.unexpected_here()),
        }
    }

    /// Parses any of the four string forms. The cursor sits on the opening
    /// quote.
    fn parse_string(&mut self, delim: u8) -> Result<String, Error> {
        if self.peek_at(1) == Some(delim) && self.peek_at(2) == Some(delim) {
            self.pos += 3;
            return self.parse_multiline_string(delim);
        }
        self.pos += 1;
        self.parse_string_in_line(delim)
    }

    /// Single-line basic or literal string; the opening quote is consumed.
    /// Plain runs are copied wholesale, escapes handled at the boundaries.
    fn parse_string_in_line(&mut self, delim: u8) -> Result<String, Error> {
        let mut out = String::new();
        let mut flush = self.pos;
        loop {
            let Some(byte) = self.peek() else {
                return Err(self.err(ErrorKind::UnterminatedString));
            };
            if byte == delim {
                out.push_str(&self.line[flush..self.pos]);
                self.pos += 1;
                return Ok(out);
            }
            if byte == b'\\' && delim == b'"' {
                out.push_str(&self.line[flush..self.pos]);
                self.pos += 1;
                out.push(self.parse_escape()?);
                flush = self.pos;
            } else {
                self.pos += 1;
            }
        }
    }

    /// Multi-line basic or literal string; the opening quotes are consumed.
    fn parse_multiline_string(&mut self, delim: u8) -> Result<String, Error> {
        let mut out = String::new();
        // A newline immediately after the opening delimiter is discarded.
        let mut suppress_newline = self.at_eol();
        // After a line-continuation backslash the newline and all leading
        // whitespace of following lines are dropped.
        let mut trimming = false;
        loop {
            if trimming {
                self.eat_whitespace();
                if !self.at_eol() {
                    trimming = false;
                }
            }
            let mut flush = self.pos;
            while !self.at_eol() && !trimming {
                let byte = self.line.as_bytes()[self.pos];
                if byte == delim
                    && self.peek_at(1) == Some(delim)
                    && self.peek_at(2) == Some(delim)
                {
                    out.push_str(&self.line[flush..self.pos]);
                    self.pos += 3;
                    return Ok(out);
                }
                if byte == b'\\' {
                    let rest = &self.line.as_bytes()[self.pos + 1..];
                    if rest.iter().all(|&b| matches!(b, b' ' | b'\t')) {
                        out.push_str(&self.line[flush..self.pos]);
                        self.pos = self.line.len();
                        trimming = true;
                        break;
                    }
                    if delim == b'"' {
                        out.push_str(&self.line[flush..self.pos]);
                        self.pos += 1;
                        out.push(self.parse_escape()?);
                        flush = self.pos;
                        continue;
                    }
                    // literal strings keep the backslash as content
                }
                self.pos += 1;
            }
            if !trimming {
                out.push_str(&self.line[flush..self.pos]);
            }
            if !self.next_line()? {
                return Err(self.err(ErrorKind::UnterminatedString));
            }
            if !trimming && !suppress_newline {
                out.push('\n');
            }
            suppress_newline = false;
        }
    }

    /// Decodes one escape sequence; the cursor sits on the character after
    /// the backslash.
    fn parse_escape(&mut self) -> Result<char, Error> {
        let Some(byte) = self.peek() else {
            return Err(self.err(ErrorKind::UnterminatedString));
        };
        self.pos += 1;
        match byte {
            b'b' => Ok('\u{0008}'),
            b't' => Ok('\t'),
            b'n' => Ok('\n'),
            b'f' => Ok('\u{000C}'),
            b'r' => Ok('\r'),
            b'"' => Ok('"'),
            b'\\' => Ok('\\'),
            _ => {
                self.pos -= 1;
                let found = self.peek_char().unwrap_or('\u{fffd}');
                Err(self.err(ErrorKind::BadEscape(found)))
            }
        }
    }

    fn parse_bool(&mut self) -> Result<Value, Error> {
        let start = self.pos;
        let bytes = self.line.as_bytes();
        let mut at = start;
        while at < bytes.len() && !matches!(bytes[at], b' ' | b'\t' | b'#' | b',' | b']' | b'}') {
            at += 1;
        }
        let value = match &self.line[start..at] {
            "true" => true,
            "false" => false,
            _ => return Err(self.err(ErrorKind::MalformedBool)),
        };
        self.pos = at;
        Ok(Value::Boolean(value))
    }

    fn parse_datetime(&mut self) -> Result<Value, Error> {
        let end = self.find_end_of_date();
        match DateTime::from_rfc3339(&self.line[self.pos..end]) {
            Some(datetime) => {
                self.pos = end;
                Ok(Value::DateTime(datetime))
            }
            None => Err(self.err(ErrorKind::MalformedDate)),
        }
    }

    /// Integer or float. A number is a float iff its text contains `.`, `e`,
    /// or `E`; `_` separators must sit between two digits and are stripped
    /// before conversion.
    fn parse_number(&mut self) -> Result<Value, Error> {
        let start = self.pos;
        let bytes = self.line.as_bytes();
        let mut at = start;
        while at < bytes.len()
            && matches!(bytes[at], b'0'..=b'9' | b'+' | b'-' | b'_' | b'.' | b'e' | b'E')
        {
            at += 1;
        }
        let raw = &self.line[start..at];
        let rb = raw.as_bytes();
        for (i, &b) in rb.iter().enumerate() {
            if b == b'_' {
                let digit_before = i > 0 && rb[i - 1].is_ascii_digit();
                let digit_after = i + 1 < rb.len() && rb[i + 1].is_ascii_digit();
                if !digit_before || !digit_after {
                    return Err(self.err(ErrorKind::MalformedNumber));
                }
            }
        }
        if !number_shape_is_valid(rb) {
            return Err(self.err(ErrorKind::MalformedNumber));
        }
        let is_float = rb.iter().any(|&b| matches!(b, b'.' | b'e' | b'E'));
        let cleaned: String = raw.chars().filter(|&c| c != '_').collect();
        let value = if is_float {
            match cleaned.parse::<f64>() {
                Ok(v) if v.is_finite() => Value::Float(v),
                _ => return Err(self.err(ErrorKind::MalformedNumber)),
            }
        } else {
            match cleaned.parse::<i64>() {
                Ok(v) => Value::Integer(v),
                Err(_) => return Err(self.err(ErrorKind::MalformedNumber)),
            }
        };
        self.pos = at;
        Ok(value)
    }

    /// Whitespace and comments between array tokens; arrays may span lines.
    fn skip_array_whitespace(&mut self) -> Result<(), Error> {
        loop {
            self.eat_whitespace();
            match self.peek() {
                None | Some(b'#') => {
                    if !self.next_line()? {
                        return Err(self.err(ErrorKind::UnterminatedArray));
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// `[` was seen. The first element fixes the array's type: a scalar kind,
    /// nested arrays, or (for inline tables) promotion to a table array.
    fn parse_array(&mut self, depth_remaining: i16) -> Result<Value, Error> {
        self.pos += 1;
        self.skip_array_whitespace()?;
        if self.eat_byte(b']') {
            return Ok(Value::Array(Array::new()));
        }
        let first = self.parse_value(depth_remaining)?;
        if let Value::Table(table) = first {
            let mut tables = TableArray::new();
            tables.push(table);
            self.finish_table_array(tables, depth_remaining)
        } else {
            self.finish_value_array(first, depth_remaining)
        }
    }

    fn finish_value_array(
        &mut self,
        first: Value,
        depth_remaining: i16,
    ) -> Result<Value, Error> {
        if first.is_table_array() {
            // an array of inline tables is already a table array and cannot
            // itself be an element of a nested array
            return Err(self.err(ErrorKind::HeterogeneousArray));
        }
        let nested = first.is_array();
        let kind = first.scalar_kind();
        let mut array = Array::new();
        array.push(first);
        loop {
            self.skip_array_whitespace()?;
            if self.eat_byte(b']') {
                break;
            }
            self.expect_byte(b',')?;
            self.skip_array_whitespace()?;
            if self.eat_byte(b']') {
                break;
            }
            let value = self.parse_value(depth_remaining)?;
            let matches_first = if nested {
                value.is_array()
            } else {
                value.scalar_kind() == kind
            };
            if !matches_first {
                return Err(self.err(ErrorKind::HeterogeneousArray));
            }
            array.push(value);
        }
        Ok(Value::Array(array))
    }

    fn finish_table_array(
        &mut self,
        mut tables: TableArray,
        depth_remaining: i16,
    ) -> Result<Value, Error> {
        loop {
            self.skip_array_whitespace()?;
            if self.eat_byte(b']') {
                break;
            }
            self.expect_byte(b',')?;
            self.skip_array_whitespace()?;
            if self.eat_byte(b']') {
                break;
            }
            match self.parse_value(depth_remaining)? {
                Value::Table(table) => tables.push(table),
                _ => return Err(self.err(ErrorKind::HeterogeneousArray)),
            }
        }
        Ok(Value::TableArray(tables))
    }

    /// `{` was seen. Inline tables live on a single line.
    fn parse_inline_table(&mut self, depth_remaining: i16) -> Result<Table, Error> {
        self.pos += 1;
        let mut table = Table::new();
        self.eat_whitespace();
        if self.eat_byte(b'}') {
            return Ok(table);
        }
        loop {
            if self.at_eol() {
                return Err(self.err(ErrorKind::UnterminatedInlineTable));
            }
            self.parse_key_value(&mut table, depth_remaining)?;
            self.eat_whitespace();
            if self.eat_byte(b'}') {
                return Ok(table);
            }
            if !self.eat_byte(b',') {
                return Err(self.err(ErrorKind::UnterminatedInlineTable));
            }
            self.eat_whitespace();
        }
    }
}

/// Re-resolves the current-table key path against the root. Paths come from
/// [`Parser::parse_header`], which guarantees every segment resolves to a
/// table or a non-empty table array.
fn resolve_path<'a>(root: &'a mut Table, path: &[String]) -> &'a mut Table {
    let mut table = root;
    for part in path {
        table = match table.get_mut(part) {
            Some(Value::Table(sub)) => sub,
            Some(Value::TableArray(array)) => array
                .last_mut()
                .expect("table arrays gain their first element on creation"),
            _ => unreachable!("header parsing validated the current-table path"),
        };
    }
    table
}

fn number_shape_is_valid(bytes: &[u8]) -> bool {
    let mut at = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        at += 1;
    }
    // underscore placement was checked already, so treat it as a digit here
    let mut digit_run = |at: &mut usize| {
        let start = *at;
        while *at < bytes.len() && (bytes[*at].is_ascii_digit() || bytes[*at] == b'_') {
            *at += 1;
        }
        *at > start
    };
    if !digit_run(&mut at) {
        return false;
    }
    if at < bytes.len() && bytes[at] == b'.' {
        at += 1;
        if !digit_run(&mut at) {
            return false;
        }
    }
    if at < bytes.len() && matches!(bytes[at], b'e' | b'E') {
        at += 1;
        if at < bytes.len() && matches!(bytes[at], b'+' | b'-') {
            at += 1;
        }
        if !digit_run(&mut at) {
            return false;
        }
    }
    at == bytes.len()
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal PSRFITS reading.
//!
//! Covers exactly what the uploader needs from an archive: keyword lookups
//! in the primary header, and the first row of the first binary-table
//! extension (the pulsar ephemeris in GUPPI and PUPPI archives). Headers
//! are sequences of 2880-byte blocks holding 80-byte cards; table cells are
//! big-endian.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{Error, Result};

const BLOCK_LEN: usize = 2880;
const CARD_LEN: usize = 80;

/// One keyword card from a FITS header.
#[derive(Debug, Clone)]
struct Card {
    keyword: String,
    value: Option<HeaderValue>,
}

/// A parsed header card value.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Logical(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

/// A parsed FITS header, primary or extension.
#[derive(Debug, Clone)]
pub struct Header {
    cards: Vec<Card>,
}

impl Header {
    /// Looks up the parsed value of a keyword.
    pub fn get(&self, keyword: &str) -> Option<&HeaderValue> {
        self.cards
            .iter()
            .find(|card| card.keyword == keyword)
            .and_then(|card| card.value.as_ref())
    }

    /// Returns a keyword's value as text.
    pub fn text(&self, keyword: &str) -> Result<&str> {
        match self.require(keyword)? {
            HeaderValue::Text(s) => Ok(s),
            _ => Err(invalid(keyword, "expected a string value")),
        }
    }

    /// Returns a keyword's value as an integer.
    pub fn integer(&self, keyword: &str) -> Result<i64> {
        match self.require(keyword)? {
            HeaderValue::Integer(n) => Ok(*n),
            _ => Err(invalid(keyword, "expected an integer value")),
        }
    }

    /// Returns a keyword's value as a float. Integer cards are accepted.
    pub fn float(&self, keyword: &str) -> Result<f64> {
        match self.require(keyword)? {
            HeaderValue::Float(x) => Ok(*x),
            HeaderValue::Integer(n) => Ok(*n as f64),
            _ => Err(invalid(keyword, "expected a numeric value")),
        }
    }

    fn require(&self, keyword: &str) -> Result<&HeaderValue> {
        self.get(keyword)
            .ok_or_else(|| Error::MissingKeyword(keyword.to_string()))
    }
}

fn invalid(keyword: &str, reason: &str) -> Error {
    Error::InvalidKeyword {
        keyword: keyword.to_string(),
        reason: reason.to_string(),
    }
}

/// First-row contents of a binary-table extension.
#[derive(Debug, Clone)]
pub struct Table {
    /// Column name and first-row value pairs, in native column order.
    pub fields: Vec<(String, Value)>,
}

/// A scalar cell decoded from a binary table.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Reads the primary header of a FITS file.
pub fn read_header(path: &Path) -> Result<Header> {
    let mut reader = BufReader::new(File::open(path)?);
    read_primary(&mut reader, path)
}

/// Reads the first-extension binary table of a FITS file, decoding the
/// first row of every column.
pub fn read_first_table(path: &Path) -> Result<Table> {
    let mut reader = BufReader::new(File::open(path)?);
    let primary = read_primary(&mut reader, path)?;
    let skip = i64::try_from(padded_len(data_len(&primary)?))
        .map_err(|_| Error::CorruptedFits("primary data too large".to_string()))?;
    if skip > 0 {
        reader.seek(SeekFrom::Current(skip))?;
    }
    let ext = read_extension(&mut reader)?;
    decode_first_row(&mut reader, &ext)
}

fn read_primary<R: Read>(reader: &mut R, path: &Path) -> Result<Header> {
    let mut block = [0u8; BLOCK_LEN];
    match reader.read_exact(&mut block) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
            return Err(Error::NotFits(path.display().to_string()))
        }
        Err(e) => return Err(e.into()),
    }
    if block[..6] != *b"SIMPLE" {
        return Err(Error::NotFits(path.display().to_string()));
    }
    read_cards(reader, block)
}

fn read_extension<R: Read>(reader: &mut R) -> Result<Header> {
    let mut block = [0u8; BLOCK_LEN];
    match reader.read_exact(&mut block) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
            return Err(Error::CorruptedFits(
                "no extension after primary HDU".to_string(),
            ))
        }
        Err(e) => return Err(e.into()),
    }
    let header = read_cards(reader, block)?;
    match header.text("XTENSION") {
        Ok("BINTABLE") => Ok(header),
        _ => Err(Error::CorruptedFits(
            "first extension is not a binary table".to_string(),
        )),
    }
}

/// Accumulates header cards starting from an already-read first block.
fn read_cards<R: Read>(reader: &mut R, first: [u8; BLOCK_LEN]) -> Result<Header> {
    let mut cards = Vec::new();
    let mut block = first;
    loop {
        if scan_block(&block, &mut cards) {
            return Ok(Header { cards });
        }
        match reader.read_exact(&mut block) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(Error::CorruptedFits("header without END card".to_string()))
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Parses one block of cards into `cards`. Returns true once END is seen.
fn scan_block(block: &[u8; BLOCK_LEN], cards: &mut Vec<Card>) -> bool {
    for raw in block.chunks(CARD_LEN) {
        let card = parse_card(raw);
        if card.keyword == "END" {
            return true;
        }
        if !card.keyword.is_empty() {
            cards.push(card);
        }
    }
    false
}

fn parse_card(raw: &[u8]) -> Card {
    let keyword = String::from_utf8_lossy(&raw[..8.min(raw.len())])
        .trim()
        .to_string();
    // Bytes 8..10 hold the "= " value indicator; anything else is a
    // commentary card.
    let value = if raw.len() > 10 && &raw[8..10] == b"= " {
        parse_value(&String::from_utf8_lossy(&raw[10..]))
    } else {
        None
    };
    Card { keyword, value }
}

fn parse_value(s: &str) -> Option<HeaderValue> {
    let s = s.trim_start();
    if let Some(rest) = s.strip_prefix('\'') {
        return Some(HeaderValue::Text(parse_text(rest)));
    }
    // For non-string values everything after a slash is a comment.
    let s = match s.find('/') {
        Some(pos) => &s[..pos],
        None => s,
    };
    match s.trim() {
        "" => None,
        "T" => Some(HeaderValue::Logical(true)),
        "F" => Some(HeaderValue::Logical(false)),
        n => {
            if let Ok(int) = n.parse::<i64>() {
                return Some(HeaderValue::Integer(int));
            }
            // FITS floats may use a Fortran D exponent.
            n.replace(['D', 'd'], "E")
                .parse::<f64>()
                .ok()
                .map(HeaderValue::Float)
        }
    }
}

/// Collects a quoted string value. A doubled quote is an escaped quote;
/// trailing blanks are insignificant.
fn parse_text(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                out.push('\'');
            } else {
                break;
            }
        } else {
            out.push(c);
        }
    }
    out.trim_end().to_string()
}

/// Byte length of the data area following a header, before padding.
fn data_len(header: &Header) -> Result<u64> {
    let naxis = header.integer("NAXIS")?;
    if naxis == 0 {
        return Ok(0);
    }
    let bits = header.integer("BITPIX")?.unsigned_abs();
    let mut elements: u64 = 1;
    for axis in 1..=naxis {
        let n = header.integer(&format!("NAXIS{axis}"))?;
        let n = u64::try_from(n)
            .map_err(|_| Error::CorruptedFits(format!("negative NAXIS{axis}")))?;
        elements = elements.saturating_mul(n);
    }
    Ok(elements.saturating_mul(bits / 8))
}

fn padded_len(len: u64) -> u64 {
    len.div_ceil(BLOCK_LEN as u64) * BLOCK_LEN as u64
}

fn decode_first_row<R: Read>(reader: &mut R, header: &Header) -> Result<Table> {
    if header.integer("NAXIS2")? < 1 {
        return Err(Error::CorruptedFits("binary table has no rows".to_string()));
    }
    let row_len = usize::try_from(header.integer("NAXIS1")?)
        .map_err(|_| Error::CorruptedFits("bad NAXIS1".to_string()))?;
    let mut row = vec![0u8; row_len];
    match reader.read_exact(&mut row) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
            return Err(Error::CorruptedFits("truncated table row".to_string()))
        }
        Err(e) => return Err(e.into()),
    }

    let count = header.integer("TFIELDS")?;
    let mut fields = Vec::new();
    let mut offset = 0usize;
    for index in 1..=count {
        let name = header.text(&format!("TTYPE{index}"))?.trim().to_string();
        let form = header.text(&format!("TFORM{index}"))?;
        let (value, width) = decode_cell(&row, offset, form)?;
        fields.push((name, value));
        offset += width;
    }
    Ok(Table { fields })
}

/// Decodes one cell at `offset`; returns the value and the cell width.
fn decode_cell(row: &[u8], offset: usize, form: &str) -> Result<(Value, usize)> {
    let form = form.trim();
    let digits = form.chars().take_while(|c| c.is_ascii_digit()).count();
    let repeat: usize = if digits == 0 {
        1
    } else {
        form[..digits].parse().map_err(|_| unsupported(form))?
    };
    let code = form[digits..].chars().next().ok_or_else(|| unsupported(form))?;

    match code {
        'A' => {
            let end = offset.checked_add(repeat).ok_or_else(short_row)?;
            let bytes = row.get(offset..end).ok_or_else(short_row)?;
            let text = String::from_utf8_lossy(bytes)
                .trim_end_matches([' ', '\0'])
                .to_string();
            Ok((Value::Text(text), repeat))
        }
        // Vector cells never occur in an ephemeris row.
        _ if repeat != 1 => Err(unsupported(form)),
        'B' => Ok((
            Value::Integer(i64::from(u8::from_be_bytes(be_bytes(row, offset)?))),
            1,
        )),
        'I' => Ok((
            Value::Integer(i64::from(i16::from_be_bytes(be_bytes(row, offset)?))),
            2,
        )),
        'J' => Ok((
            Value::Integer(i64::from(i32::from_be_bytes(be_bytes(row, offset)?))),
            4,
        )),
        'K' => Ok((Value::Integer(i64::from_be_bytes(be_bytes(row, offset)?)), 8)),
        'E' => Ok((
            Value::Float(f64::from(f32::from_be_bytes(be_bytes(row, offset)?))),
            4,
        )),
        'D' => Ok((Value::Float(f64::from_be_bytes(be_bytes(row, offset)?)), 8)),
        _ => Err(unsupported(form)),
    }
}

fn be_bytes<const N: usize>(row: &[u8], offset: usize) -> Result<[u8; N]> {
    let end = offset.checked_add(N).ok_or_else(short_row)?;
    row.get(offset..end)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(short_row)
}

fn short_row() -> Error {
    Error::CorruptedFits("table row shorter than its columns".to_string())
}

fn unsupported(form: &str) -> Error {
    Error::CorruptedFits(format!("unsupported column format '{form}'"))
}

#[cfg(test)]
#[path = "fits_tests.rs"]
mod tests;

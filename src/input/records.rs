use std::io::Read;

use super::{sniff_format, InputFormat, PeekableReader};
use crate::error::{Result, SniffError};
use crate::sniff::trim;
use crate::value::RawJson;

const PEEK_LEN: usize = 64;

/// One value buffer read from the input, numbered from 1 by line (json lines)
/// or by element (json array).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub number: usize,
    pub raw: RawJson,
}

/// Reads every value buffer from `reader`. The format is sniffed from the
/// first bytes unless `format` forces one.
pub fn read_records<R: Read>(reader: R, format: Option<InputFormat>) -> Result<Vec<Record>> {
    let mut peekable = PeekableReader::new(reader);
    let format = match format {
        Some(format) => Some(format),
        None => peek_format(&mut peekable)?,
    };
    log::debug!("input format: {:?}", format);

    let records = match format {
        Some(InputFormat::JsonArray) => read_json_array(peekable)?,
        Some(InputFormat::JsonLines) | None => read_json_lines(peekable)?,
    };
    log::debug!("read {} records", records.len());
    Ok(records)
}

// Widens the peek window until it holds a whole non-whitespace character or
// the input ends, so a long blank prefix does not hide the first value.
fn peek_format<R: Read>(peekable: &mut PeekableReader<R>) -> Result<Option<InputFormat>> {
    let mut len = PEEK_LEN;
    loop {
        let peek = peekable.peek(len)?;
        if peek.len() < len || trim(peek).len() >= 4 {
            return Ok(sniff_format(peek));
        }
        len *= 2;
    }
}

fn read_json_lines<R: Read>(reader: PeekableReader<R>) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (idx, line) in reader.records().enumerate() {
        let line = line?;
        if trim(&line).is_empty() {
            continue;
        }
        records.push(Record {
            number: idx + 1,
            raw: RawJson::from(line),
        });
    }
    Ok(records)
}

fn read_json_array<R: Read>(mut reader: PeekableReader<R>) -> Result<Vec<Record>> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;

    let elements: Vec<RawJson> =
        serde_json::from_slice(&content).map_err(|e| SniffError::JsonParse {
            record: 1,
            message: e.to_string(),
        })?;

    Ok(elements
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| Record {
            number: idx + 1,
            raw,
        })
        .collect())
}

use anyhow::{anyhow, bail, Context, Result};
use csv::StringRecord;
use flate2::read::GzDecoder;
use std::{fs::File, io::BufReader, path::Path};

use crate::schema::{ColumnType, TripRow, Value, COLUMNS};

pub mod date_parser;

/// Streams a gzipped trip file as bounded chunks of coerced rows. The
/// sequence is finite and not restartable once consumed.
pub struct ChunkReader {
    records: csv::StringRecordsIntoIter<GzDecoder<BufReader<File>>>,
    chunk_size: usize,
    /// 1-based file line of the last record read (header is line 1).
    line: u64,
}

impl ChunkReader {
    /// Opens the file and verifies its header against the declared schema.
    pub fn open<P: AsRef<Path>>(path: P, chunk_size: usize) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(GzDecoder::new(BufReader::new(file)));

        let headers = reader.headers().context("reading CSV header")?;
        verify_header(headers)?;

        Ok(Self {
            records: reader.into_records(),
            chunk_size,
            line: 1,
        })
    }

    /// Reads the next chunk of at most `chunk_size` rows. Returns `None`
    /// once the file is exhausted; any malformed field aborts instead.
    pub fn next_chunk(&mut self) -> Result<Option<Vec<TripRow>>> {
        let mut rows = Vec::with_capacity(self.chunk_size);
        while rows.len() < self.chunk_size {
            match self.records.next() {
                Some(record) => {
                    let record = record.context("reading CSV record")?;
                    self.line += 1;
                    rows.push(coerce_row(&record, self.line)?);
                }
                None => break,
            }
        }
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows))
        }
    }
}

fn verify_header(headers: &StringRecord) -> Result<()> {
    let expected: Vec<&str> = COLUMNS.iter().map(|(name, _)| *name).collect();
    let actual: Vec<&str> = headers.iter().map(|h| h.trim()).collect();
    if actual != expected {
        bail!("unexpected header: got {:?}, want {:?}", actual, expected);
    }
    Ok(())
}

fn coerce_row(record: &StringRecord, line: u64) -> Result<TripRow> {
    if record.len() != COLUMNS.len() {
        bail!(
            "line {}: expected {} fields, got {}",
            line,
            COLUMNS.len(),
            record.len()
        );
    }
    COLUMNS
        .iter()
        .zip(record.iter())
        .map(|((name, ty), raw)| {
            coerce_field(raw, *ty)
                .with_context(|| format!("line {}: bad {} value {:?}", line, name, raw))
        })
        .collect()
}

/// Coerce one raw field per its declared type. Empty fields become NULLs;
/// anything else that fails to parse is an error.
fn coerce_field(raw: &str, ty: ColumnType) -> Result<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(match ty {
            ColumnType::Int => Value::Int(None),
            ColumnType::Float => Value::Float(None),
            ColumnType::Text => Value::Text(None),
            ColumnType::Timestamp => Value::Timestamp(None),
        });
    }
    Ok(match ty {
        ColumnType::Int => Value::Int(Some(raw.parse()?)),
        ColumnType::Float => Value::Float(Some(raw.parse()?)),
        ColumnType::Text => Value::Text(Some(raw.to_string())),
        ColumnType::Timestamp => Value::Timestamp(Some(
            date_parser::parse_timestamp(raw)
                .ok_or_else(|| anyhow!("unparseable timestamp"))?,
        )),
    })
}

//! CSV row source and sink.
//!
//! A [`Table`] is a header plus data rows, addressed by header label. It is
//! what the parser consumes and what the serializer produces.

use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::error::Result;
use crate::{output, parser, rank};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Table {
            headers: headers.into_iter().collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rows.push(cells.into_iter().collect());
    }

    /// Reads a CSV document whose first line is the header.
    ///
    /// Cells are trimmed, a leading UTF-8 BOM is skipped and rows may be
    /// shorter or longer than the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = strip_bom(rdr.headers()?);
        let mut rows = Vec::new();
        for result in rdr.records() {
            rows.push(result?);
        }

        Ok(Table { headers, rows })
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = WriterBuilder::new().flexible(true).from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    /// Position of `label` in the header, if present.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == label)
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `row` under the column `label`.
    pub fn get(&self, row: usize, label: &str) -> Option<&str> {
        let col = self.position(label)?;
        self.rows.get(row)?.get(col)
    }
}

fn strip_bom(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').trim()
            } else {
                h
            }
        })
        .collect()
}

/// Reads a score table, computes sums, averages and ranks, and writes the
/// result table. Returns the number of records written.
///
/// Nothing is written when parsing fails.
pub fn process<R: Read, W: Write>(source: R, sink: W) -> Result<usize> {
    let table = Table::from_reader(source)?;
    let records = rank::rank(parser::parse_and_aggregate(&table)?);
    output::serialize(&records).write_to(sink)?;
    Ok(records.len())
}

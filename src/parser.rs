//! Record parser for score tables.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::aggregate::Scores;
use crate::columns::{self, Column, Field};
use crate::error::{Error, Result};
use crate::record::Record;
use crate::table::Table;

/// Header positions of the input columns, resolved once per table.
struct Layout {
    name: Slot,
    age: Slot,
    language: Slot,
    math: Slot,
    english: Slot,
}

type Slot = (usize, &'static Column);

impl Layout {
    fn resolve(table: &Table) -> Result<Self> {
        let locate = |field: Field| -> Result<Slot> {
            let column = columns::column(field);
            let pos = table.position(column.label).ok_or(Error::Schema {
                column: column.label,
            })?;
            Ok((pos, column))
        };

        Ok(Layout {
            name: locate(Field::Name)?,
            age: locate(Field::Age)?,
            language: locate(Field::Language)?,
            math: locate(Field::Math)?,
            english: locate(Field::English)?,
        })
    }
}

/// Parses every data row of `table` into a [`Record`] with its sum and
/// average computed. Ranks are left unset.
///
/// # Errors
///
/// Returns [`Error::Schema`] if a required column is missing from the header,
/// [`Error::FieldParse`] for the first cell that does not parse, or
/// [`Error::Overflow`] when a row's scores cannot be summed. No records are
/// returned on failure.
pub fn parse_and_aggregate(table: &Table) -> Result<Vec<Record>> {
    let layout = Layout::resolve(table)?;

    table
        .rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let cell = |(pos, column): Slot| Cell {
                row,
                column,
                raw: cells.get(pos).unwrap_or(""),
            };

            let age = cell(layout.age).parse::<i32>()?;
            let scores = Scores {
                language: cell(layout.language).parse::<Decimal>()?,
                math: cell(layout.math).parse::<Decimal>()?,
                english: cell(layout.english).parse::<Decimal>()?,
            };

            Record::new(cell(layout.name).raw.trim(), age, scores)
                .ok_or(Error::Overflow { row })
        })
        .collect()
}

struct Cell<'a> {
    row: usize,
    column: &'static Column,
    raw: &'a str,
}

impl Cell<'_> {
    fn parse<T: FromStr>(&self) -> Result<T> {
        self.raw.trim().parse().map_err(|_| Error::FieldParse {
            row: self.row,
            column: self.column.label,
            value: self.raw.to_string(),
            expected: self.column.kind.describe(),
        })
    }
}

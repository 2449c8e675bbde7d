//! Column layout of the score table.
//!
//! [`COLUMNS`] is read by both the parser and the serializer, so the labels
//! and their order live in exactly one place.

/// Record attribute bound to a column. Variants are declared in
/// [`COLUMNS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Language,
    Math,
    English,
    Sum,
    Average,
    Rank,
}

/// How a cell's raw text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Integer,
    Decimal,
}

impl Kind {
    pub fn describe(self) -> &'static str {
        match self {
            Kind::Text => "text",
            Kind::Integer => "an integer",
            Kind::Decimal => "a decimal number",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub field: Field,
    pub kind: Kind,
}

const fn col(label: &'static str, field: Field, kind: Kind) -> Column {
    Column { label, field, kind }
}

pub const NAME: &str = "名前";
pub const AGE: &str = "年齢";
pub const LANGUAGE: &str = "国語";
pub const MATH: &str = "数学";
pub const ENGLISH: &str = "英語";
pub const SUM: &str = "合計";
pub const AVERAGE: &str = "平均点";
pub const RANK: &str = "順位";

/// Every column in output order. The first five are read from input; sum,
/// average and rank are always computed.
pub static COLUMNS: &[Column] = &[
    col(NAME, Field::Name, Kind::Text),
    col(AGE, Field::Age, Kind::Integer),
    col(LANGUAGE, Field::Language, Kind::Decimal),
    col(MATH, Field::Math, Kind::Decimal),
    col(ENGLISH, Field::English, Kind::Decimal),
    col(SUM, Field::Sum, Kind::Decimal),
    col(AVERAGE, Field::Average, Kind::Decimal),
    col(RANK, Field::Rank, Kind::Integer),
];

/// The column bound to `field`.
pub fn column(field: Field) -> &'static Column {
    &COLUMNS[field as usize]
}

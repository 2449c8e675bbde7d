//! Serialization of ranked records into the output table.

use crate::columns::{COLUMNS, Field};
use crate::record::Record;
use crate::table::Table;

/// Builds the output table: the input columns followed by sum, average and
/// rank, in [`COLUMNS`] order.
///
/// Decimal values keep the scale they were computed with. Records that have
/// not been ranked get an empty rank cell.
pub fn serialize(records: &[Record]) -> Table {
    let mut table = Table::new(COLUMNS.iter().map(|c| c.label));
    for record in records {
        table.push_row(COLUMNS.iter().map(|c| render(record, c.field)));
    }
    table
}

fn render(record: &Record, field: Field) -> String {
    match field {
        Field::Name => record.name.clone(),
        Field::Age => record.age.to_string(),
        Field::Language => record.scores().language.to_string(),
        Field::Math => record.scores().math.to_string(),
        Field::English => record.scores().english.to_string(),
        Field::Sum => record.sum().to_string(),
        Field::Average => record.average().to_string(),
        Field::Rank => record.rank().map(|r| r.to_string()).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Scores;
    use crate::columns::{AVERAGE, NAME, RANK, SUM};
    use crate::parser::parse_and_aggregate;
    use crate::rank::rank;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn record(name: &str, age: i32, scores: [&str; 3]) -> Record {
        let [l, m, e] = scores.map(|s| Decimal::from_str(s).unwrap());
        Record::new(
            name,
            age,
            Scores {
                language: l,
                math: m,
                english: e,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_serialize_header_order() {
        let table = serialize(&[]);
        let headers: Vec<_> = table.headers().collect();

        assert_eq!(
            headers,
            vec!["名前", "年齢", "国語", "数学", "英語", "合計", "平均点", "順位"]
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_serialize_keeps_decimal_scale() {
        let ranked = rank(vec![record("Eve", 22, ["80.50", "90", "70.25"])]);
        let table = serialize(&ranked);

        assert_eq!(table.get(0, "国語"), Some("80.50"));
        assert_eq!(table.get(0, SUM), Some("240.75"));
        assert_eq!(table.get(0, AVERAGE), Some("80.25"));
        assert_eq!(table.get(0, RANK), Some("1"));
    }

    #[test]
    fn test_serialize_unranked_leaves_rank_empty() {
        let table = serialize(&[record("Eve", 22, ["1", "2", "3"])]);
        assert_eq!(table.get(0, RANK), Some(""));
    }

    #[test]
    fn test_round_trip_recomputes_same_values() {
        let original = rank(vec![
            record("Alice", 20, ["80", "90", "70"]),
            record("Bob, Jr.", 21, ["90.5", "89.5", "90"]),
            record("Cara", 19, ["60", "60", "60.01"]),
        ]);

        let reparsed = rank(parse_and_aggregate(&serialize(&original)).unwrap());

        assert_eq!(reparsed, original);
        assert_eq!(reparsed[1].name, "Bob, Jr.");
        assert_eq!(serialize(&reparsed).get(2, NAME), Some("Cara"));
    }
}

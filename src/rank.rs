//! Competition ranking by average score.

use rust_decimal::Decimal;

use crate::record::Record;

/// Computes the competition rank ("1224" ranking) of every average.
///
/// The returned vector is indexed like `averages`. Higher averages rank
/// first; equal averages share the rank of the first position of their
/// group, and the next group's rank skips past the tied entries.
pub fn rank_positions(averages: &[Decimal]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..averages.len()).collect();
    // sort_by is stable, so ties keep input order
    order.sort_by(|&a, &b| averages[b].cmp(&averages[a]));

    let mut ranks = vec![0; averages.len()];
    let mut current = 1;
    for (i, &idx) in order.iter().enumerate() {
        if i > 0 && averages[idx] != averages[order[i - 1]] {
            current = i as u32 + 1;
        }
        ranks[idx] = current;
    }

    ranks
}

/// Assigns a rank to every record, keeping input order.
pub fn rank(records: Vec<Record>) -> Vec<Record> {
    let averages: Vec<Decimal> = records.iter().map(Record::average).collect();
    let ranks = rank_positions(&averages);

    records
        .into_iter()
        .zip(ranks)
        .map(|(record, rank)| record.with_rank(rank))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Scores;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn decs(values: &[&str]) -> Vec<Decimal> {
        values.iter().map(|v| dec(v)).collect()
    }

    fn record(name: &str, l: i64, m: i64, e: i64) -> Record {
        Record::new(
            name,
            20,
            Scores {
                language: Decimal::from(l),
                math: Decimal::from(m),
                english: Decimal::from(e),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_positions(&[]).is_empty());
        assert!(rank(Vec::new()).is_empty());
    }

    #[test]
    fn test_rank_single() {
        assert_eq!(rank_positions(&decs(&["42.00"])), vec![1]);
    }

    #[test]
    fn test_rank_all_equal() {
        assert_eq!(rank_positions(&decs(&["70.00", "70.00", "70.00"])), vec![1, 1, 1]);
    }

    #[test]
    fn test_rank_distinct_in_input_order() {
        assert_eq!(rank_positions(&decs(&["80.00", "90.00", "60.00"])), vec![2, 1, 3]);
    }

    #[test]
    fn test_rank_ties_skip_following_rank() {
        assert_eq!(rank_positions(&decs(&["85.00", "85.00", "90.00"])), vec![2, 2, 1]);
        assert_eq!(
            rank_positions(&decs(&["90", "90", "80", "70", "70", "60"])),
            vec![1, 1, 3, 4, 4, 6]
        );
    }

    #[test]
    fn test_rank_equality_ignores_scale() {
        assert_eq!(rank_positions(&decs(&["80", "80.00", "79.99"])), vec![1, 1, 3]);
    }

    #[test]
    fn test_rank_is_one_plus_strictly_greater_count() {
        let averages = decs(&["55.5", "72.25", "72.25", "99", "55.5", "10", "72.25"]);
        let ranks = rank_positions(&averages);

        for (i, &r) in ranks.iter().enumerate() {
            let greater = averages.iter().filter(|a| **a > averages[i]).count();
            assert_eq!(r as usize, greater + 1);
            assert!(r as usize <= averages.len());
        }
        assert!(ranks.contains(&1));

        for i in 0..averages.len() {
            for j in 0..averages.len() {
                if averages[i] > averages[j] {
                    assert!(ranks[i] < ranks[j]);
                }
                if averages[i] == averages[j] {
                    assert_eq!(ranks[i], ranks[j]);
                }
            }
        }
    }

    #[test]
    fn test_rank_records_preserves_order() {
        let records = vec![
            record("Alice", 80, 90, 70),
            record("Bob", 90, 90, 90),
            record("Cara", 60, 60, 60),
        ];
        let ranked = rank(records);

        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Cara"]);

        let ranks: Vec<_> = ranked.iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![Some(2), Some(1), Some(3)]);
    }

    #[test]
    fn test_rerank_overwrites_previous_rank() {
        let first = rank(vec![record("A", 50, 50, 50), record("B", 10, 10, 10)]);
        let second = rank(vec![first[1].clone(), record("C", 20, 20, 20)]);

        assert_eq!(first[1].rank(), Some(2));
        assert_eq!(second[0].rank(), Some(2));
        assert_eq!(second[1].rank(), Some(1));
    }
}

use rust_decimal::Decimal;

use crate::aggregate::Scores;

/// One student's scores together with the statistics derived from them.
///
/// Scores and the derived fields are private: the only way to build a
/// `Record` is [`Record::new`], which computes the derived fields and
/// returns `None` when the scores add up past the decimal range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub age: i32,
    scores: Scores,
    sum: Decimal,
    average: Decimal,
    rank: Option<u32>,
}

impl Record {
    pub fn new(name: impl Into<String>, age: i32, scores: Scores) -> Option<Self> {
        let totals = scores.totals()?;
        Some(Record {
            name: name.into(),
            age,
            scores,
            sum: totals.sum,
            average: totals.average,
            rank: None,
        })
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn sum(&self) -> Decimal {
        self.sum
    }

    pub fn average(&self) -> Decimal {
        self.average
    }

    /// Competition rank within the set the record was ranked in, if any.
    pub fn rank(&self) -> Option<u32> {
        self.rank
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(l: i64, m: i64, e: i64) -> Scores {
        Scores {
            language: Decimal::from(l),
            math: Decimal::from(m),
            english: Decimal::from(e),
        }
    }

    #[test]
    fn test_new_computes_totals() {
        let r = Record::new("Bob", 21, scores(90, 90, 90)).unwrap();
        assert_eq!(r.sum(), Decimal::from(270));
        assert_eq!(r.average().to_string(), "90.00");
        assert_eq!(r.rank(), None);
    }

    #[test]
    fn test_with_rank_keeps_other_fields() {
        let r = Record::new("Cara", 19, scores(60, 60, 60)).unwrap();
        let ranked = r.clone().with_rank(3);
        assert_eq!(ranked.rank(), Some(3));
        assert_eq!(ranked.name, r.name);
        assert_eq!(ranked.average(), r.average());
    }
}

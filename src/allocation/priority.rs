//! Allocation priority ordering.

use std::cmp::Ordering;

use crate::config::TieBreak;
use crate::models::Student;

/// Sorts students by grade average, highest first.
///
/// Equal averages are ordered by `tie_break`: `LoadOrder` keeps the input
/// order (the sort is stable), `ById` compares ids lexicographically.
/// Averages are compared with [`f64::total_cmp`], so the order is total.
pub fn sort_by_priority<'a, I>(students: I, tie_break: TieBreak) -> Vec<&'a Student>
where
    I: IntoIterator<Item = &'a Student>,
{
    let mut sorted: Vec<&Student> = students.into_iter().collect();
    sorted.sort_by(|a, b| compare(a, b, tie_break));
    sorted
}

fn compare(a: &Student, b: &Student, tie_break: TieBreak) -> Ordering {
    let by_average = b.average.total_cmp(&a.average);
    match tie_break {
        TieBreak::LoadOrder => by_average,
        TieBreak::ById => by_average.then_with(|| a.id.cmp(&b.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(sorted: &[&Student]) -> Vec<String> {
        sorted.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_average_descending() {
        let students = vec![
            Student::new("low", 18.0),
            Student::new("high", 29.5),
            Student::new("mid", 24.0),
        ];
        let sorted = sort_by_priority(&students, TieBreak::LoadOrder);
        assert_eq!(ids(&sorted), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_tie_load_order() {
        let students = vec![
            Student::new("b", 25.0),
            Student::new("a", 25.0),
            Student::new("c", 30.0),
        ];
        let sorted = sort_by_priority(&students, TieBreak::LoadOrder);
        assert_eq!(ids(&sorted), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_tie_by_id() {
        let students = vec![
            Student::new("b", 25.0),
            Student::new("a", 25.0),
            Student::new("c", 30.0),
        ];
        let sorted = sort_by_priority(&students, TieBreak::ById);
        assert_eq!(ids(&sorted), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_empty() {
        let students: Vec<Student> = Vec::new();
        let sorted = sort_by_priority(&students, TieBreak::ById);
        assert!(sorted.is_empty());
    }
}

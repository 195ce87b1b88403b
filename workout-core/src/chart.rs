use crate::entry::WorkoutEntry;

/// Minutes per workout type for one user, ready to hand to a bar chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Group `user_name`'s entries by workout type and sum their minutes.
/// Labels follow the first occurrence of each type.
pub fn chart_series(entries: &[WorkoutEntry], user_name: &str) -> ChartSeries {
    let mut series = ChartSeries::default();
    for entry in entries.iter().filter(|e| e.user_name == user_name) {
        match series
            .labels
            .iter()
            .position(|label| *label == entry.workout_type)
        {
            Some(index) => series.values[index] += entry.workout_minutes,
            None => {
                series.labels.push(entry.workout_type.clone());
                series.values.push(entry.workout_minutes);
            }
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::entry;

    #[test]
    fn groups_by_type_in_first_occurrence_order() {
        let entries = vec![
            entry("A", "Running", 30.0),
            entry("B", "Yoga", 99.0),
            entry("A", "Cycling", 45.0),
        ];
        let series = chart_series(&entries, "A");
        assert_eq!(series.labels, vec!["Running", "Cycling"]);
        assert_eq!(series.values, vec![30.0, 45.0]);
    }

    #[test]
    fn sums_repeated_types() {
        let entries = vec![
            entry("A", "Cycling", 10.0),
            entry("A", "Running", 30.0),
            entry("A", "Cycling", 15.0),
        ];
        let series = chart_series(&entries, "A");
        assert_eq!(
            series.iter().collect::<Vec<_>>(),
            vec![("Cycling", 25.0), ("Running", 30.0)]
        );
    }

    #[test]
    fn user_without_entries_gives_empty_series() {
        let entries = vec![entry("A", "Running", 30.0)];
        let series = chart_series(&entries, "a");
        assert!(series.is_empty());
        assert!(series.values.is_empty());
    }
}

use slant_core::FilterType;

use crate::types::PlotPoint;

/// Points whose category matches the active filter; everything for `All`.
#[must_use]
pub fn filter(points: &[PlotPoint], active: FilterType) -> Vec<PlotPoint> {
    match active.category() {
        None => points.to_vec(),
        Some(category) => points
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use slant_core::{Bias, Category};

    use super::*;
    use crate::test_support::point;

    fn sample() -> Vec<PlotPoint> {
        vec![
            point(1_000, 0.2, Category::Left, Bias::Left),
            point(2_000, -0.3, Category::Social, Bias::Neutral),
            point(3_000, 0.0, Category::Right, Bias::Right),
            point(4_000, 0.9, Category::Left, Bias::Left),
        ]
    }

    #[test]
    fn all_returns_value_equal_copy() {
        let points = sample();
        assert_eq!(filter(&points, FilterType::All), points);
    }

    #[test]
    fn category_filter_keeps_matching_points_in_order() {
        let points = sample();
        let left = filter(&points, FilterType::Left);
        let times: Vec<i64> = left.iter().map(|p| p.time_millis).collect();
        assert_eq!(times, vec![1_000, 4_000]);
        assert_eq!(filter(&points, FilterType::Social).len(), 1);
        assert_eq!(points.len(), 4, "input must not be mutated");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter(&[], FilterType::Right).is_empty());
    }
}

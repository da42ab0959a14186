use serde::Serialize;

/// Descriptive statistics summarizing a series of `f32` observations.
///
/// Contains the measures of central tendency and dispersion that replay
/// reports embed: minimum, maximum, mean, median, and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// The minimum observed value.
    pub min: f32,
    /// The maximum observed value.
    pub max: f32,
    /// The arithmetic mean of the series.
    pub mean: f32,
    /// The median of the series.
    pub median: f32,
    /// The population standard deviation of the series.
    pub std_dev: f32,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// The values are collected and sorted internally.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the series contains at least one value
    /// * `None` - if the series is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use lanecoach_stats::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f32::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// Skips the sorting step; use this when the series is already sorted
    /// in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f32]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let n = sorted_values.len() as f32;
        let mean = sorted_values.iter().copied().sum::<f32>() / n;
        let median = sorted_values[sorted_values.len() / 2];
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f32>()
            / n;
        let std_dev = variance.sqrt();

        Some(Self {
            min,
            max,
            mean,
            median,
            std_dev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_yields_none() {
        assert_eq!(DescriptiveStats::new(std::iter::empty()), None);
        assert_eq!(DescriptiveStats::from_sorted(&[]), None);
    }

    #[test]
    fn single_value_series() {
        let stats = DescriptiveStats::new([7.5]).unwrap();
        assert_eq!(stats.min, 7.5);
        assert_eq!(stats.max, 7.5);
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.median, 7.5);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn std_dev_of_constant_series_is_zero() {
        let stats = DescriptiveStats::new([4.0, 4.0, 4.0]).unwrap();
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn mean_and_median_of_even_length_series() {
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.mean, 2.5);
        // Upper-median convention: index len / 2 of the sorted series.
        assert_eq!(stats.median, 3.0);
    }
}

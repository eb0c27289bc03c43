use serde::Serialize;

/// Descriptive statistics over integer samples.
///
/// The median is the upper middle element for even-sized samples; the
/// standard deviation is the population one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary<T> {
    pub count: usize,
    pub min: T,
    pub max: T,
    pub median: T,
    pub mean: f64,
    pub std_dev: f64,
}

impl<T> Summary<T>
where
    T: Copy + Ord + Into<f64>,
{
    /// Returns `None` for an empty sample.
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_unstable();
        Self::from_sorted(&values)
    }

    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[T]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted(),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().map(|&v| Into::<f64>::into(v)).sum::<f64>() / n;
        let variance = sorted_values
            .iter()
            .map(|&v| (Into::<f64>::into(v) - mean).powi(2))
            .sum::<f64>()
            / n;

        Some(Self {
            count,
            min,
            max,
            median: sorted_values[count / 2],
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

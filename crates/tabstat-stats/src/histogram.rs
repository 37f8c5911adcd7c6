use std::ops::Range;

/// A histogram over caller-supplied bin edges.
///
/// Every pair of consecutive edges forms one half-open bin `[lo, hi)`. Values
/// outside all bins, including a value equal to the last edge, are not
/// counted anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The bins comprising the histogram, in edge order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
///
/// Each bin represents a range of values and the count of data points falling within that range.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: usize,
}

impl Histogram {
    /// Creates a histogram from values and ascending bin edges.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points to count. Order does not matter.
    /// * `edges` - Bin edges in ascending order. `n` edges produce `n - 1` bins.
    ///
    /// # Returns
    ///
    /// A `Histogram` with one bin per consecutive edge pair. Fewer than two
    /// edges produce a histogram with no bins.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tabstat_stats::histogram::Histogram;
    /// let histogram = Histogram::with_edges([0.5, 2.0, 9.0, 10.0], &[0.0, 5.0, 10.0]);
    /// assert_eq!(histogram.bins[0].count, 2);
    /// // 10.0 sits on the last edge and is not counted
    /// assert_eq!(histogram.bins[1].count, 1);
    /// ```
    #[must_use]
    pub fn with_edges<I>(values: I, edges: &[f64]) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut bins = edges
            .windows(2)
            .map(|pair| HistogramBin {
                range: pair[0]..pair[1],
                count: 0,
            })
            .collect::<Vec<_>>();

        for value in values {
            // Unsorted edges may produce overlapping bins; each is tested on its own.
            for bin in &mut bins {
                if bin.range.contains(&value) {
                    bin.count += 1;
                }
            }
        }

        Self { bins }
    }

    /// Total number of values counted across all bins.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

/// Computes the Pearson product-moment correlation coefficient.
///
/// `r = Σ(x - x̄)(y - ȳ) / sqrt(Σ(x - x̄)² · Σ(y - ȳ)²)`
///
/// Means are taken over the supplied pairs only, so callers decide which
/// observations participate (for example, pairwise-complete filtering).
///
/// # Arguments
///
/// * `pairs` - Paired observations `(x, y)`
///
/// # Returns
///
/// * `Some(r)` - the unrounded coefficient
/// * `None` - if there are no pairs, or if either variable has zero variance
///
/// # Examples
///
/// ```
/// use tabstat_stats::correlation::pearson;
///
/// let r = pearson([(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)]).unwrap();
/// assert!((r + 1.0).abs() < 1e-12);
///
/// // Constant y has no variance
/// assert_eq!(pearson([(1.0, 5.0), (2.0, 5.0)]), None);
/// let empty: [(f64, f64); 0] = [];
/// assert_eq!(pearson(empty), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pearson<I>(pairs: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let pairs = pairs.into_iter().collect::<Vec<_>>();
    if pairs.is_empty() {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for &(x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx.powi(2);
        sum_sq_y += dy.powi(2);
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

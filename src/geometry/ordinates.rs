//! Splitting a sample series into same-sign ordinate groups

/// Default tolerance below which an ordinate counts as zero
///
/// Shared by group splitting and coordinate generation so that the point
/// where a new group starts and the point where a crossing is inserted can
/// never disagree.
pub const DEFAULT_ZERO_TOL: f64 = 1e-2;

/// Split a sample series into maximal contiguous same-sign groups
///
/// A new group starts at index `i` exactly when the series genuinely crosses
/// the baseline there: `values[i-1] * values[i] < 0` and `values[i]` is
/// non-negligible (`|values[i]| > zero_tol`). Near-zero samples never open a
/// group on their own; they are appended to the current one. Concatenating
/// the returned groups reproduces the input series exactly.
///
/// # Arguments
/// * `values` - Sample series in station order (may be empty)
/// * `zero_tol` - Magnitude below which a sample counts as zero
pub fn separate_ordinates(values: &[f64], zero_tol: f64) -> Vec<Vec<f64>> {
    let mut groups = Vec::new();
    let Some((&first, rest)) = values.split_first() else {
        return groups;
    };

    let mut current = vec![first];
    let mut prev = first;
    for &v in rest {
        if prev * v < 0.0 && v.abs() > zero_tol {
            groups.push(std::mem::take(&mut current));
        }
        current.push(v);
        prev = v;
    }
    groups.push(current);
    groups
}

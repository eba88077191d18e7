//! Rating helpers for the leaderboard stats panel: quantiles, the rating
//! slider's bounds and marks, the range label and the rating histogram.

use serde::Serialize;

pub fn lerp(start: f64, end: f64, delta: f64) -> f64 {
    delta * (end - start) + start
}

/// Linearly interpolated quantile of `values` in their given order.
///
/// Empty input is 0; `percent <= 0` is the first value and `percent >= 1` the
/// last.
pub fn quantile(values: &[u32], percent: f64) -> f64 {
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return 0.0;
    };
    if values.len() == 1 || percent <= 0.0 {
        return first as f64;
    }
    if percent >= 1.0 {
        return last as f64;
    }

    let index = (values.len() - 1) as f64 * percent;
    let floor = index.floor();
    let low = values[floor as usize] as f64;
    let high = values[floor as usize + 1] as f64;
    lerp(low, high, index - floor)
}

/// Slider bounds: lowest rating floored and highest rating ceiled to `step`,
/// saturating at `u32::MAX`. `None` for an empty leaderboard.
pub fn filter_bounds(ratings: &[u32], step: u32) -> Option<(u32, u32)> {
    let step = step.max(1);
    let min = *ratings.iter().min()?;
    let max = *ratings.iter().max()?;
    let ceiled = u64::from(max).div_ceil(u64::from(step)) * u64::from(step);
    Some((min / step * step, u32::try_from(ceiled).unwrap_or(u32::MAX)))
}

/// Slider marks at 0, 25, 50, 75 and 100 percent of the range.
pub fn marks(min: u32, max: u32) -> [u32; 5] {
    [0.0, 0.25, 0.5, 0.75, 1.0].map(|p| lerp(min as f64, max as f64, p).round() as u32)
}

/// `"2100+"` when only the lower bound is narrowed, `"2100 - 2400"` otherwise.
pub fn range_label(min: u32, max: u32, leaderboard_min: u32, leaderboard_max: u32) -> String {
    if min != leaderboard_min && max >= leaderboard_max {
        format!("{}+", min)
    } else {
        format!("{} - {}", min, max)
    }
}

/// Share of the rating-range loadouts kept by the talent filters; 1 when the
/// range is empty.
pub fn filtered_share(filtered: usize, in_rating_range: usize) -> f64 {
    if in_rating_range == 0 {
        return 1.0;
    }
    filtered as f64 / in_rating_range as f64
}

/// One `step`-wide histogram bar starting at `rating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistogramBucket {
    pub rating: u32,
    pub all: usize,
    pub filtered: usize,
}

/// Bucket `all` and `filtered` ratings into `step`-wide bars spanning the
/// leaderboard's [`filter_bounds`]. Ratings outside `min..=max` are not
/// counted, their bars stay at zero.
pub fn histogram(all: &[u32], filtered: &[u32], step: u32, min: u32, max: u32) -> Vec<HistogramBucket> {
    let step = step.max(1);
    let Some((bucket_min, bucket_max)) = filter_bounds(all, step) else {
        return Vec::new();
    };

    let len = ((bucket_max - bucket_min) / step) as usize + 1;
    let mut buckets: Vec<HistogramBucket> = (0..len as u32)
        .map(|i| HistogramBucket {
            rating: bucket_min + i * step,
            all: 0,
            filtered: 0,
        })
        .collect();

    let bucket_index = |rating: u32| -> Option<usize> {
        if !(min..=max).contains(&rating) {
            return None;
        }
        rating.checked_sub(bucket_min).map(|offset| (offset / step) as usize)
    };
    for &rating in all {
        if let Some(bucket) = bucket_index(rating).and_then(|i| buckets.get_mut(i)) {
            bucket.all += 1;
        }
    }
    for &rating in filtered {
        if let Some(bucket) = bucket_index(rating).and_then(|i| buckets.get_mut(i)) {
            bucket.filtered += 1;
        }
    }
    buckets
}

use super::super::domain::RatingMap;

/// Weighted average of the rated categories on the 1-5 scale, rounded to
/// one decimal place. A map with no known category rated yields exactly
/// `0.0`.
///
/// Rounding is half-up and happens in integer tenths: ratings and weights
/// accumulate as whole percent units, so an exact tie such as 3.25 always
/// lands on 3.3 instead of drifting on accumulated float error.
///
/// Ratings outside [1, 5] are not validated here; they propagate
/// arithmetically and are the caller's responsibility to reject.
pub fn overall_score(ratings: &RatingMap) -> f64 {
    let mut weighted_total: u32 = 0;
    let mut weight_total: u32 = 0;

    for (category, rating) in ratings {
        weighted_total += u32::from(*rating) * category.weight_percent();
        weight_total += category.weight_percent();
    }

    if weight_total == 0 {
        return 0.0;
    }

    let tenths = (20 * weighted_total + weight_total) / (2 * weight_total);
    f64::from(tenths) / 10.0
}

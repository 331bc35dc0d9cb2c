//! Conference score rule
//!
//! A conference's score is the mean of its review ratings rounded to one
//! decimal place. With no reviews there is no score to compute and the
//! stored value is left alone.

/// Mean of `ratings` rounded to one decimal, or `None` for an empty slice.
pub fn average_score(ratings: &[i32]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    let mean = sum as f64 / ratings.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

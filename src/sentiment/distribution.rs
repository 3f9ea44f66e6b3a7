// Polarity histogram for dashboard views.
//
// Bins are equal-width over the fixed range [-1, 1]. Every bin is half-open
// except the last, which also takes polarity 1.0.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

pub const DEFAULT_BINS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentHistogram {
    /// Number of polarities in each bin
    pub counts: Vec<usize>,
    /// `counts.len() + 1` bin edges, ascending from -1.0 to 1.0
    pub edges: Vec<f64>,
}

pub fn histogram(polarities: &[f64], bins: usize) -> Result<SentimentHistogram> {
    if bins == 0 {
        return Err(AnalyticsError::invalid(
            "histogram bins",
            "at least one bin is required",
        ));
    }

    let width = 2.0 / bins as f64;
    let edges = (0..=bins).map(|i| -1.0 + i as f64 * width).collect();
    let mut counts = vec![0usize; bins];
    for &p in polarities {
        let p = p.clamp(-1.0, 1.0);
        let bin = (((p + 1.0) / width).floor() as usize).min(bins - 1);
        counts[bin] += 1;
    }

    Ok(SentimentHistogram { counts, edges })
}

use crate::dataset::{Sample, BASE_BUFFER_SIZE};
use crate::error::{BufplotError, Result};

/// Fraction of the peak rate a sample must reach to count as "optimal".
pub const OPTIMAL_THRESHOLD: f64 = 0.95;

/// Peak and optimal samples derived from a measurement table.
#[derive(Debug, Clone, Copy)]
pub struct Analysis {
    pub peak: Sample,
    pub optimal: Sample,
}

impl Analysis {
    /// Computes the peak (maximum transfer rate, first occurrence on ties)
    /// and the optimal sample (first in ascending buffer-size order to reach
    /// 95% of the peak rate). The input does not have to be sorted and the
    /// optimal buffer is not assumed to be smaller than the peak buffer.
    pub fn from_samples(samples: &[Sample]) -> Result<Self> {
        let mut sorted: Vec<Sample> = samples.to_vec();
        sorted.sort_by_key(|s| s.buffer_size);

        let mut peak = *sorted.first().ok_or(BufplotError::EmptyDataset)?;
        for sample in &sorted[1..] {
            if sample.transfer_rate > peak.transfer_rate {
                peak = *sample;
            }
        }

        let threshold = peak.transfer_rate * OPTIMAL_THRESHOLD;
        let optimal = sorted
            .iter()
            .find(|s| s.transfer_rate >= threshold)
            .copied()
            .unwrap_or(peak); // threshold < peak rate, so a match always exists

        Ok(Analysis { peak, optimal })
    }

    /// Transfer rate a sample must reach to qualify as optimal.
    pub fn threshold(&self) -> f64 {
        self.peak.transfer_rate * OPTIMAL_THRESHOLD
    }

    /// Optimal buffer size as a whole multiple of the base page size.
    /// Integer division, truncating.
    pub fn multiplier(&self) -> u64 {
        self.optimal.buffer_size / BASE_BUFFER_SIZE
    }

    /// Optimal rate as a percentage of the peak rate.
    pub fn percent_of_peak(&self) -> f64 {
        self.optimal.transfer_rate / self.peak.transfer_rate * 100.0
    }
}

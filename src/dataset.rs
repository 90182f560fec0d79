/// One measured data point from the copy-throughput experiment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Buffer size in bytes.
    pub buffer_size: u64,
    /// Measured transfer rate in MB/s.
    pub transfer_rate: f64,
}

/// Memory page size the buffer sizes are multiples of.
pub const BASE_BUFFER_SIZE: u64 = 4096;

/// Number of powers of two covered by the experiment (4096 through 4194304).
pub const TICK_COUNT: u32 = 11;

// Measured with mycat5 on the reference machine, one row per buffer size,
// ascending. Rates are the mean of three runs.
const MEASUREMENTS: [(u64, f64); 11] = [
    (4096, 6033.33),
    (8192, 9833.33),
    (16384, 17733.33),
    (32768, 25233.33),
    (65536, 19900.00),
    (131072, 21833.33),
    (262144, 22166.66),
    (524288, 23100.00),
    (1048576, 21466.66),
    (2097152, 14433.33),
    (4194304, 14000.00),
];

/// Returns the embedded experiment table, ascending by buffer size.
pub fn measurements() -> Vec<Sample> {
    MEASUREMENTS
        .iter()
        .map(|&(buffer_size, transfer_rate)| Sample {
            buffer_size,
            transfer_rate,
        })
        .collect()
}

/// Tick positions for the log2 x-axis: `BASE_BUFFER_SIZE * 2^i` for each
/// power of two present in the data.
pub fn axis_ticks() -> Vec<u64> {
    (0..TICK_COUNT).map(|i| BASE_BUFFER_SIZE << i).collect()
}

/// Extra time spread across a cascade when the flag is enabled without an
/// explicit total override.
pub const DEFAULT_CASCADE_EXTRA_MS: u32 = 1000;

/// Per-child animation duration across a cascaded sequence.
///
/// Interpolates on a logarithmic curve between `duration_ms` (at
/// `start_index`) and `total_ms` (at `end_index`): durations grow
/// geometrically rather than linearly, so items compress visually near the
/// shorter end. Iterating indexes in reverse order reverses the direction of
/// the stagger.
pub fn delay_for(index: usize, start_index: usize, end_index: usize, duration_ms: u32, total_ms: u32) -> u32 {
    let duration = f64::from(duration_ms.max(1));
    let total = f64::from(total_ms.max(1));
    if start_index == end_index {
        return duration.round() as u32;
    }
    let min_log = duration.ln();
    let max_log = total.ln();
    let scale = (max_log - min_log) / (end_index as f64 - start_index as f64);
    (min_log + scale * (index as f64 - start_index as f64)).exp().round() as u32
}

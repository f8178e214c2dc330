pub fn mean(data: &[f64]) -> Option<f64> {
    let sum = data.iter().sum::<f64>();
    let count = data.len();

    match count {
        positive if positive > 0 => Some(sum / count as f64),
        _ => None,
    }
}

/// Average of millisecond samples, rounded to the nearest whole millisecond.
/// Empty input yields 0 (no timed game ever scores on zero samples).
pub fn average_ms(samples: &[f64]) -> u32 {
    mean(samples).map(|m| m.round() as u32).unwrap_or(0)
}

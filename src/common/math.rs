//! Rolling and recursive series math.
//!
//! Every function returns one slot per input value. A slot is `None` while
//! the window has not seen enough values yet.

/// Exponentially weighted mean, seeded with the first value.
///
/// `y[0] = x[0]`, `y[t] = (1 - alpha) * y[t-1] + alpha * x[t]`. The first
/// `min_periods - 1` slots are reported as undefined even though the
/// recursion already runs through them.
pub fn ewm(values: &[f64], alpha: f64, min_periods: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;

    for (i, &value) in values.iter().enumerate() {
        let current = match prev {
            Some(p) => (1.0 - alpha) * p + alpha * value,
            None => value,
        };
        prev = Some(current);
        out.push(if i + 1 >= min_periods { Some(current) } else { None });
    }

    out
}

/// EMA with span `period` (`alpha = 2 / (period + 1)`).
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    ewm(values, 2.0 / (period as f64 + 1.0), period)
}

/// Wilder smoothing (`alpha = 1 / period`).
pub fn wilder_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    ewm(values, 1.0 / period as f64, period)
}

/// Simple moving average over a trailing window.
pub fn sma_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, mean)
}

/// Population standard deviation (ddof = 0) over a trailing window.
pub fn std_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, |window| {
        let m = mean(window);
        let variance = window.iter().map(|v| (v - m).powi(2)).sum::<f64>() / window.len() as f64;
        variance.sqrt()
    })
}

fn rolling<F>(values: &[f64], period: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    if period == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|i| {
            if i + 1 < period {
                None
            } else {
                Some(f(&values[i + 1 - period..=i]))
            }
        })
        .collect()
}

fn mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}

/// Element-wise `a - b`, undefined where either side is.
pub fn subtract(a: &[Option<f64>], b: &[Option<f64>]) -> Vec<Option<f64>> {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(x - y),
            _ => None,
        })
        .collect()
}

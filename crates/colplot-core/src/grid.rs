// File: crates/colplot-core/src/grid.rs
// Summary: Tick layout helpers: "nice" 1/2/5 steps and tick label formatting.

/// Step close to `span / target` rounded to 1, 2 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 {
        1.0
    } else if norm < 3.0 {
        2.0
    } else if norm < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions covering [min, max] with roughly `target` intervals.
pub fn ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return vec![min];
    }
    if !(max - min).is_finite() {
        return vec![min, max];
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil();
    let last = (max / step).floor();
    let count = (last - first).max(0.0) as usize + 1;
    (0..count)
        .map(|i| {
            let v = (first + i as f64) * step;
            // -0.0 prints as "-0.00"
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect()
}

/// Decimals needed to tell ticks `step` apart.
pub fn decimals_for(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    }
}

/// X tick label: as many decimals as the tick step needs.
pub fn format_x_tick(v: f64, step: f64) -> String {
    format!("{:.*}", decimals_for(step), v)
}

/// Y tick label: always two decimals.
pub fn format_y_tick(v: f64) -> String {
    format!("{v:.2}")
}

/// Numeric helpers shared by the cross section providers and the sampler.

/// Linear interpolation of tabulated data.
///
/// Given ascending `x` values and matching `y` values, returns the
/// interpolated y at `x_new`. Outside the tabulated range the first or last
/// y value is returned (clamped extrapolation).
pub fn interpolate_linear(x: &[f64], y: &[f64], x_new: f64) -> f64 {
    if x.is_empty() {
        return f64::NAN;
    }
    if x.len() == 1 || x_new <= x[0] {
        return y[0];
    }
    if x_new >= x[x.len() - 1] {
        return y[y.len() - 1];
    }

    // Binary search for the largest i with x[i] <= x_new
    let mut low = 0usize;
    let mut high = x.len() - 1;
    while high - low > 1 {
        let mid = (low + high) / 2;
        if x[mid] <= x_new {
            low = mid;
        } else {
            high = mid;
        }
    }
    let t = (x_new - x[low]) / (x[low + 1] - x[low]);
    y[low] + t * (y[low + 1] - y[low])
}

/// The point lying at fraction `frac` along the segment from `a` to `b`.
///
/// `frac = 0` gives `a`, `frac = 1` gives `b`. Used to place an emission
/// uniformly along an electron step.
pub fn point_between(a: [f64; 3], b: [f64; 3], frac: f64) -> [f64; 3] {
    [
        a[0] + frac * (b[0] - a[0]),
        a[1] + frac * (b[1] - a[1]),
        a[2] + frac * (b[2] - a[2]),
    ]
}

/// Euclidean distance between two points.
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let dz = b[2] - a[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

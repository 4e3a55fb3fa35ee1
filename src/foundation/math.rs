//! Scalar interpolation kernels shared by the camera and trail animators.

/// Linear interpolation. Exact at both ends and exact when `a == b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Classic `3t^2 - 2t^3` smoothstep, with `t` clamped to `[0, 1]`.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Cubic Hermite basis `(h00, h10, h01, h11)` at `t`.
#[inline]
pub fn hermite_basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        2.0 * t3 - 3.0 * t2 + 1.0,
        t3 - 2.0 * t2 + t,
        -2.0 * t3 + 3.0 * t2,
        t3 - t2,
    ]
}

/// Cubic Hermite interpolation between `p0` and `p1` with tangents `m0`, `m1`
/// already scaled to the unit parameter interval.
///
/// Written as `p0 + (p1 - p0) * h01 + ...` (using `h00 = 1 - h01`) so that a flat span with zero
/// tangents reproduces `p0` bit for bit.
#[inline]
pub fn hermite(p0: f64, p1: f64, m0: f64, m1: f64, t: f64) -> f64 {
    let [_, h10, h01, h11] = hermite_basis(t);
    p0 + (p1 - p0) * h01 + h10 * m0 + h11 * m1
}

/// Uniform Catmull-Rom spline through `p1` (t = 0) and `p2` (t = 1).
#[inline]
pub fn catmull_rom(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Logarithmic interpolation: `exp(lerp(ln a, ln b, t))`.
///
/// Moves at a constant ratio per unit `t`, which reads as uniform zoom speed when `a`/`b` are
/// altitudes spanning several orders of magnitude. Returns `a` at `t <= 0` and `b` at `t >= 1`
/// exactly. Non-positive inputs have no logarithm and fall back to [`lerp`].
pub fn log_lerp(a: f64, b: f64, t: f64) -> f64 {
    if t <= 0.0 || a == b {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    if a <= 0.0 || b <= 0.0 {
        return lerp(a, b, t);
    }
    let (la, lb) = (a.ln(), b.ln());
    (la + (lb - la) * t).exp()
}

/// `num / den`, or `0.0` when the span is empty or not finite.
#[inline]
pub fn ratio_or_zero(num: f64, den: f64) -> f64 {
    if den > 0.0 && den.is_finite() {
        num / den
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

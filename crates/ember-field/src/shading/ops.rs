use glam::Vec2;

/// Cubic Hermite transition from 0 at `edge0` to 1 at `edge1`, clamped outside.
///
/// Degenerate edges (`edge0 == edge1`) act as a hard step at that edge.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return step(edge0, x);
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// 0 below `edge`, 1 at or above it.
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge { 0.0 } else { 1.0 }
}

/// Linear remap from `[in_lo, in_hi]` to `[out_lo, out_hi]`. Not clamped.
#[inline]
pub fn remap(x: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    out_lo + (x - in_lo) / (in_hi - in_lo) * (out_hi - out_lo)
}

/// `x mod 1` with floor semantics, so negative inputs wrap into `[0, 1)`.
#[inline]
pub fn wrap01(x: f32) -> f32 {
    let r = x - x.floor();
    // -1e-9 - floor(-1e-9) rounds to exactly 1.0 in f32.
    if r >= 1.0 { 0.0 } else { r }
}

#[inline]
pub fn wrap01_vec2(v: Vec2) -> Vec2 {
    Vec2::new(wrap01(v.x), wrap01(v.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── smoothstep ────────────────────────────────────────────────────────

    #[test]
    fn smoothstep_clamps_outside_edges() {
        assert_eq!(smoothstep(0.0, 1.0, -2.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 5.0), 1.0);
    }

    #[test]
    fn smoothstep_midpoint_is_half() {
        assert!((smoothstep(0.0, 0.3, 0.15) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn smoothstep_degenerate_edges_is_step() {
        assert_eq!(smoothstep(0.5, 0.5, 0.49), 0.0);
        assert_eq!(smoothstep(0.5, 0.5, 0.5), 1.0);
    }

    // ── step ──────────────────────────────────────────────────────────────

    #[test]
    fn step_edge_is_inclusive() {
        assert_eq!(step(0.01, 0.01), 1.0);
        assert_eq!(step(0.01, 0.009), 0.0);
    }

    // ── remap ─────────────────────────────────────────────────────────────

    #[test]
    fn remap_identity_range() {
        assert_eq!(remap(0.42, 0.0, 1.0, 0.0, 1.0), 0.42);
    }

    #[test]
    fn remap_is_unclamped() {
        assert_eq!(remap(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
    }

    // ── wrap01 ────────────────────────────────────────────────────────────

    #[test]
    fn wrap01_negative_scroll() {
        assert!((wrap01(-0.25) - 0.75).abs() < 1e-6);
        assert!((wrap01(-3.25) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn wrap01_stays_below_one() {
        assert!(wrap01(-1e-9) < 1.0);
        assert_eq!(wrap01(2.0), 0.0);
    }
}

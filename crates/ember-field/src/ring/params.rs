/// Tunable inputs of the ring field.
///
/// The field accepts any values; `separation_end` may be below
/// `separation_start`, which simply inverts the oscillation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingParameters {
    /// Radius of the innermost circle; circle `n` has radius `n * circle_radius`.
    pub circle_radius: f32,
    /// Angular speed in radians per second.
    pub circle_speed: f32,
    pub separation_start: f32,
    pub separation_end: f32,
    /// Vertical bounce amplitude.
    pub circle_bounce: f32,
}

impl Default for RingParameters {
    fn default() -> Self {
        Self {
            circle_radius: 1.0,
            circle_speed: 0.5,
            separation_start: 1.0,
            separation_end: 2.0,
            circle_bounce: 0.02,
        }
    }
}

/// Slider metadata for one tunable, for control-surface adapters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParameterRange {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParameterRange {
    /// Clamps into `[min, max]` and snaps to the nearest step from `min`.
    pub fn snap(&self, value: f32) -> f32 {
        if !value.is_finite() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = (self.min + steps * self.step).min(self.max);
        // Keep on-grid inputs bit-exact instead of re-deriving them from `min`.
        if (snapped - clamped).abs() <= self.step * 1e-3 { clamped } else { snapped }
    }
}

const CONTROLS: [ParameterRange; 5] = [
    ParameterRange { name: "circle_radius", label: "Circle Radius", min: 0.1, max: 3.0, step: 0.1 },
    ParameterRange { name: "circle_speed", label: "Circle Speed", min: 0.1, max: 3.0, step: 0.1 },
    ParameterRange { name: "separation_start", label: "Separation Start", min: 0.5, max: 4.0, step: 0.1 },
    ParameterRange { name: "separation_end", label: "Separation End", min: 1.0, max: 5.0, step: 0.1 },
    ParameterRange { name: "circle_bounce", label: "Circle Bounce", min: 0.01, max: 0.2, step: 0.001 },
];

impl RingParameters {
    /// Control ranges in field order: radius, speed, separation start/end, bounce.
    pub fn controls() -> [ParameterRange; 5] {
        CONTROLS
    }

    fn values(&self) -> [f32; 5] {
        [
            self.circle_radius,
            self.circle_speed,
            self.separation_start,
            self.separation_end,
            self.circle_bounce,
        ]
    }

    /// Returns a copy with every value snapped into its control range.
    pub fn clamped(&self) -> Self {
        let values = self.values();
        let mut snapped = [0.0f32; 5];
        for (i, (range, value)) in CONTROLS.iter().zip(values).enumerate() {
            snapped[i] = range.snap(value);
            if (snapped[i] - value).abs() > range.step * 0.5 || !value.is_finite() {
                log::warn!("{} {} outside control range, using {}", range.name, value, snapped[i]);
            }
        }
        Self {
            circle_radius: snapped[0],
            circle_speed: snapped[1],
            separation_start: snapped[2],
            separation_end: snapped[3],
            circle_bounce: snapped[4],
        }
    }

    /// Depth spacing between consecutive circles at `time`.
    ///
    /// Oscillates between `separation_start` and `separation_end` with period 2π.
    #[inline]
    pub fn separation(&self, time: f32) -> f32 {
        let t01 = (time.sin() + 1.0) * 0.5;
        self.separation_start + t01 * (self.separation_end - self.separation_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sit_inside_controls() {
        let params = RingParameters::default();
        assert_eq!(params.clamped(), params);
    }

    #[test]
    fn clamped_pulls_values_into_range() {
        let params = RingParameters {
            circle_radius: 10.0,
            circle_speed: -1.0,
            separation_start: 0.0,
            separation_end: 9.0,
            circle_bounce: 1.0,
        }
        .clamped();
        assert_eq!(params.circle_radius, 3.0);
        assert_eq!(params.circle_speed, 0.1);
        assert_eq!(params.separation_start, 0.5);
        assert_eq!(params.separation_end, 5.0);
        assert_eq!(params.circle_bounce, 0.2);
    }

    #[test]
    fn snap_rounds_to_step() {
        let range = CONTROLS[0];
        assert!((range.snap(1.04) - 1.0).abs() < 1e-5);
        assert!((range.snap(1.06) - 1.1).abs() < 1e-5);
    }

    #[test]
    fn snap_replaces_nan_with_min() {
        assert_eq!(CONTROLS[4].snap(f32::NAN), 0.01);
    }

    #[test]
    fn separation_oscillates_between_bounds() {
        let params = RingParameters::default();
        assert!((params.separation(0.0) - 1.5).abs() < 1e-6);
        assert!((params.separation(std::f32::consts::FRAC_PI_2) - 2.0).abs() < 1e-6);
        assert!((params.separation(-std::f32::consts::FRAC_PI_2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn separation_inverted_bounds_are_valid() {
        let params = RingParameters { separation_start: 2.0, separation_end: 1.0, ..Default::default() };
        assert!((params.separation(std::f32::consts::FRAC_PI_2) - 1.0).abs() < 1e-6);
    }
}

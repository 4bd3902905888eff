use std::fmt;

/// Errors raised while constructing or evaluating fields.
///
/// Field evaluation itself is total over the reals; the runtime domain errors
/// are a zero `instances_per_circle` and an index whose circle number does not
/// fit in `u32`. Everything else is construction-time validation of layouts,
/// noise textures and colour ramps.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// `instances_per_circle` was zero (integer division by zero).
    ZeroInstancesPerCircle,
    /// The 1-based circle number of `index` would exceed `u32::MAX`.
    IndexOutOfRange { index: u32, instances_per_circle: u32 },
    /// Circle count is zero or does not evenly divide the instance count.
    InvalidLayout { instance_count: u32, circle_count: u32 },
    /// Texel buffer length does not match `width * height`, or a dimension is zero.
    InvalidNoiseTexture { width: u32, height: u32, len: usize },
    /// Colour ramp stops are unusable.
    InvalidRamp(&'static str),
    /// Colour literal could not be parsed.
    InvalidColor(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroInstancesPerCircle => write!(f, "instances per circle must be greater than zero"),
            Self::IndexOutOfRange { index, instances_per_circle } => write!(
                f,
                "instance {index} has no circle number with {instances_per_circle} per circle"
            ),
            Self::InvalidLayout { instance_count, circle_count } => write!(
                f,
                "cannot split {instance_count} instances into {circle_count} equal circles"
            ),
            Self::InvalidNoiseTexture { width, height, len } => write!(
                f,
                "noise texture {width}x{height} does not match {len} texels"
            ),
            Self::InvalidRamp(reason) => write!(f, "invalid colour ramp: {reason}"),
            Self::InvalidColor(literal) => write!(f, "invalid colour literal {literal:?}"),
        }
    }
}

impl std::error::Error for FieldError {}

pub type Result<T> = std::result::Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_layout_numbers() {
        let msg = FieldError::InvalidLayout { instance_count: 81, circle_count: 4 }.to_string();
        assert!(msg.contains("81"));
        assert!(msg.contains('4'));
    }

    #[test]
    fn display_quotes_color_literal() {
        let msg = FieldError::InvalidColor("#zz".into()).to_string();
        assert_eq!(msg, "invalid colour literal \"#zz\"");
    }

    #[test]
    fn display_names_out_of_range_index() {
        let msg = FieldError::IndexOutOfRange { index: u32::MAX, instances_per_circle: 1 }.to_string();
        assert!(msg.contains(&u32::MAX.to_string()));
    }
}

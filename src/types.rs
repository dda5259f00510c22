//! Caller-facing dimension input and its validation.
//!
//! Dimensions arrive loosely typed (a number typed into a form, a float read
//! from a config, a literal integer) and are validated in two passes: first
//! every value must be a whole number, then every value must be at least 2.
//! Finally the whole box must fit in [`MAX_CELLS`].

use std::fmt;

use crate::errors::BoxError;

/// Smallest accepted width or height: one column/row per corner.
pub const MIN_DIMENSION: i64 = 2;

/// Largest accepted `width * height`. Keeps the grid and its projection
/// within a few hundred megabytes.
pub const MAX_CELLS: usize = 1 << 22;

/// Which dimension of the box a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

/// A box dimension as supplied by the caller, before validation
#[derive(Debug, Clone, PartialEq)]
pub enum RawDimension {
    Int(i64),
    Float(f64),
    Text(String),
}

macro_rules! raw_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawDimension {
                fn from(v: $ty) -> Self {
                    RawDimension::Int(i64::from(v))
                }
            }
        )*
    };
}

raw_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Values past i64::MAX saturate.
macro_rules! raw_from_wide_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawDimension {
                fn from(v: $ty) -> Self {
                    RawDimension::Int(i64::try_from(v).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

raw_from_wide_int!(u64, usize, isize);

impl From<f64> for RawDimension {
    fn from(v: f64) -> Self {
        RawDimension::Float(v)
    }
}

impl From<f32> for RawDimension {
    fn from(v: f32) -> Self {
        RawDimension::Float(f64::from(v))
    }
}

impl From<&str> for RawDimension {
    fn from(v: &str) -> Self {
        RawDimension::Text(v.to_string())
    }
}

impl From<String> for RawDimension {
    fn from(v: String) -> Self {
        RawDimension::Text(v)
    }
}

impl fmt::Display for RawDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawDimension::Int(v) => write!(f, "{v}"),
            RawDimension::Float(v) => write!(f, "{v}"),
            RawDimension::Text(s) => write!(f, "{s}"),
        }
    }
}

impl RawDimension {
    /// Interpret this value as a whole number.
    ///
    /// Floats must be finite with no fractional part. Text is trimmed and
    /// read as an integer, or as a float that satisfies the same rule
    /// (`"4.0"` and `"1e1"` are whole numbers, `"4.5"` and `"hi"` are not).
    /// Blank text reads as 0, which the range check then rejects.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            RawDimension::Int(v) => Some(*v),
            RawDimension::Float(v) => whole_number(*v),
            RawDimension::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Some(0);
                }
                match s.parse::<i64>() {
                    Ok(v) => Some(v),
                    Err(_) => s.parse::<f64>().ok().and_then(whole_number),
                }
            }
        }
    }
}

fn whole_number(v: f64) -> Option<i64> {
    // i64::MAX is not representable as f64; stay strictly inside the range
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < LIMIT {
        Some(v as i64)
    } else {
        None
    }
}

fn check_type(axis: Axis, raw: &RawDimension) -> Result<i64, BoxError> {
    raw.to_integer().ok_or_else(|| BoxError::InvalidDimensionType {
        axis,
        value: raw.to_string(),
    })
}

fn check_range(axis: Axis, value: i64) -> Result<usize, BoxError> {
    if value < MIN_DIMENSION {
        return Err(BoxError::InvalidDimensionRange { axis, value });
    }
    usize::try_from(value).map_err(|_| BoxError::InvalidDimensionRange { axis, value })
}

/// Validate a width/height pair, returning them as grid sizes.
///
/// Both values are type-checked before either is range-checked, so
/// `(-9, 20.2)` reports the fractional height rather than the negative width.
pub fn validate_dimensions(
    width: &RawDimension,
    height: &RawDimension,
) -> Result<(usize, usize), BoxError> {
    let w = check_type(Axis::Width, width)?;
    let h = check_type(Axis::Height, height)?;
    let (width, height) = (check_range(Axis::Width, w)?, check_range(Axis::Height, h)?);
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_CELLS => Ok((width, height)),
        _ => Err(BoxError::TooManyCells {
            width,
            height,
            max: MAX_CELLS,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_pass_through() {
        assert_eq!(RawDimension::from(7u8).to_integer(), Some(7));
        assert_eq!(RawDimension::from(-9).to_integer(), Some(-9));
        assert_eq!(RawDimension::from(31usize).to_integer(), Some(31));
    }

    #[test]
    fn floats_must_be_whole() {
        assert_eq!(RawDimension::from(4.0).to_integer(), Some(4));
        assert_eq!(RawDimension::from(20.2).to_integer(), None);
        assert_eq!(RawDimension::from(f64::NAN).to_integer(), None);
        assert_eq!(RawDimension::from(f64::INFINITY).to_integer(), None);
    }

    #[test]
    fn text_is_parsed_like_a_number() {
        assert_eq!(RawDimension::from(" 12 ").to_integer(), Some(12));
        assert_eq!(RawDimension::from("4.0").to_integer(), Some(4));
        assert_eq!(RawDimension::from("1e1").to_integer(), Some(10));
        assert_eq!(RawDimension::from("hi").to_integer(), None);
        assert_eq!(RawDimension::from("").to_integer(), Some(0));
        assert_eq!(RawDimension::from("  ").to_integer(), Some(0));
        assert_eq!(RawDimension::from("inf").to_integer(), None);
    }

    #[test]
    fn type_check_runs_before_range_check() {
        let err = validate_dimensions(&(-9).into(), &20.2.into()).unwrap_err();
        assert_eq!(
            err,
            BoxError::InvalidDimensionType {
                axis: Axis::Height,
                value: "20.2".to_string(),
            }
        );
    }

    #[test]
    fn width_is_checked_before_height() {
        let err = validate_dimensions(&1.into(), &0.into()).unwrap_err();
        assert_eq!(
            err,
            BoxError::InvalidDimensionRange {
                axis: Axis::Width,
                value: 1,
            }
        );
    }

    #[test]
    fn blank_text_is_out_of_range() {
        let err = validate_dimensions(&"".into(), &2.into()).unwrap_err();
        assert_eq!(
            err,
            BoxError::InvalidDimensionRange {
                axis: Axis::Width,
                value: 0,
            }
        );
    }

    #[test]
    fn huge_boxes_are_rejected_before_allocating() {
        let err = validate_dimensions(&"1e18".into(), &2.into()).unwrap_err();
        assert!(matches!(err, BoxError::TooManyCells { height: 2, .. }));
        assert!(validate_dimensions(&(i64::MAX).into(), &(i64::MAX).into()).is_err());
        assert!(validate_dimensions(&MAX_CELLS.into(), &2.into()).is_err());
        assert!(validate_dimensions(&(MAX_CELLS / 2).into(), &2.into()).is_ok());
    }

    #[test]
    fn minimum_dimensions_are_accepted() {
        assert_eq!(validate_dimensions(&2.into(), &2.into()), Ok((2, 2)));
    }
}

//! Free scalar helpers: clamping, interpolation, angle wrapping,
//! power-of-two utilities and random ranges.

use crate::consts::{DEG2RAD, EPSILON, RAD2DEG, TWO_PI};
use rand::Rng;

/// Check if two scalars are equal within [`EPSILON`](crate::consts::EPSILON).
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Sign of x: -1.0 for negative values, 1.0 otherwise.
#[inline]
pub fn sign(x: f32) -> f32 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Clamp x between min and max.
#[inline]
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Clamp x between 0 and 1.
#[inline]
pub fn clamp01(x: f32) -> f32 {
    clamp(x, 0.0, 1.0)
}

/// Linear interpolation from a to b by t.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear interpolation of radians, wrapped to a standard radian.
#[inline]
pub fn lerp_radian(a: f32, b: f32, t: f32) -> f32 {
    standard_radian(a + (b - a) * t)
}

/// Linear interpolation of degrees, wrapped to a standard angle.
#[inline]
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    standard_angle(a + (b - a) * t)
}

/// Wrap x into a standard radian, |x| < 2*PI.
#[inline]
pub fn standard_radian(x: f32) -> f32 {
    x % TWO_PI
}

/// Wrap x into a standard angle, |x| < 360.
#[inline]
pub fn standard_angle(x: f32) -> f32 {
    x % 360.0
}

/// Hermite smooth step of x between min and max.
pub fn smooth_step(x: f32, min: f32, max: f32) -> f32 {
    if x <= min {
        return 0.0;
    }
    if x >= max {
        return 1.0;
    }
    let t = (x - min) / (max - min);
    t * t * (3.0 - 2.0 * t)
}

/// Fifth-order smooth step of x between min and max.
pub fn smoother_step(x: f32, min: f32, max: f32) -> f32 {
    if x <= min {
        return 0.0;
    }
    if x >= max {
        return 1.0;
    }
    let t = (x - min) / (max - min);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Truncate x to n decimal places, rounding toward zero.
pub fn truncate(x: f32, n: f32) -> f32 {
    let p = 10f32.powf(n);
    let num = x * p;
    if num < 0.0 {
        num.ceil() / p
    } else {
        num.floor() / p
    }
}

/// Ping-pong x between 0 and length.
#[inline]
pub fn ping_pong(x: f32, length: f32) -> f32 {
    length - (x % length).abs()
}

/// Convert degrees to radians, wrapped to a standard radian.
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    standard_radian(degrees * DEG2RAD)
}

/// Convert radians to degrees, wrapped to a standard angle.
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    standard_angle(radians * RAD2DEG)
}

/// Check if x is a power of two. Zero counts as a power of two.
#[inline]
pub fn is_power_of_two_u32(x: u32) -> bool {
    (x & x.wrapping_sub(1)) == 0
}

/// Check if x is a power of two. Zero counts as a power of two.
#[inline]
pub fn is_power_of_two_u64(x: u64) -> bool {
    (x & x.wrapping_sub(1)) == 0
}

/// Round x up to the next power of two.
pub fn next_power_of_two_u32(mut x: u32) -> u32 {
    x = x.wrapping_sub(1);
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x.wrapping_add(1)
}

/// Round x up to the next power of two.
pub fn next_power_of_two_u64(mut x: u64) -> u64 {
    x = x.wrapping_sub(1);
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    x.wrapping_add(1)
}

/// Smallest value in the slice. Empty slices yield 0.
pub fn min_of(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f32::INFINITY, f32::min)
}

/// Largest value in the slice. Empty slices yield 0.
pub fn max_of(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f32::NEG_INFINITY, f32::max)
}

/// Random integer in [min, max).
#[inline]
pub fn rand_int_range<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.random_range(min..max)
}

/// Random float in [min, max).
#[inline]
pub fn rand_float_range<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

/// Eight-way compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Pointing along +X.
    Right,
    /// Pointing along +X, +Y.
    UpRight,
    /// Pointing along +Y.
    Up,
    /// Pointing along -X, +Y.
    UpLeft,
    /// Pointing along -X.
    Left,
    /// Pointing along -X, -Y.
    DownLeft,
    /// Pointing along -Y.
    Down,
    /// Pointing along +X, -Y.
    DownRight,
}

impl Direction {
    /// Nearest compass direction for an angle in degrees.
    pub fn from_angle(angle: f32) -> Self {
        let a = standard_angle(angle);
        if a > 337.5 || a < 22.5 {
            Self::Right
        } else if a < 67.5 {
            Self::UpRight
        } else if a < 112.5 {
            Self::Up
        } else if a < 157.5 {
            Self::UpLeft
        } else if a < 202.5 {
            Self::Left
        } else if a < 247.5 {
            Self::DownLeft
        } else if a < 292.5 {
            Self::Down
        } else if a < 337.5 {
            Self::DownRight
        } else {
            Self::Right
        }
    }

    /// Nearest compass direction for an angle in radians.
    pub fn from_radians(radians: f32) -> Self {
        Self::from_angle(standard_radian(radians) * RAD2DEG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    }

    #[test]
    fn test_smooth_step() {
        assert_eq!(smooth_step(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(smooth_step(2.0, 0.0, 1.0), 1.0);
        assert_eq!(smooth_step(0.5, 0.0, 1.0), 0.5);
    }

    #[test]
    fn test_power_of_two() {
        assert!(is_power_of_two_u32(0));
        assert!(is_power_of_two_u32(1));
        assert!(is_power_of_two_u32(64));
        assert!(!is_power_of_two_u32(48));
        assert_eq!(next_power_of_two_u32(3), 4);
        assert_eq!(next_power_of_two_u32(64), 64);
        assert_eq!(next_power_of_two_u64(1025), 2048);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(1.2345, 2.0), 1.23);
        assert_eq!(truncate(-1.2345, 2.0), -1.23);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::from_angle(0.0), Direction::Right);
        assert_eq!(Direction::from_angle(90.0), Direction::Up);
        assert_eq!(Direction::from_angle(180.0), Direction::Left);
        assert_eq!(Direction::from_angle(270.0), Direction::Down);
        assert_eq!(Direction::from_angle(45.0), Direction::UpRight);
    }

    #[test]
    fn test_rand_ranges() {
        let mut rng = rand::rng();
        for _ in 0..32 {
            let i = rand_int_range(&mut rng, -3, 7);
            assert!((-3..7).contains(&i));
            let f = rand_float_range(&mut rng, 0.5, 2.0);
            assert!((0.5..2.0).contains(&f));
        }
    }

    #[test]
    fn test_min_max_of() {
        assert_eq!(min_of(&[3.0, 1.0, 2.0]), 1.0);
        assert_eq!(max_of(&[3.0, 1.0, 2.0]), 3.0);
        assert_eq!(min_of(&[]), 0.0);
        assert_eq!(max_of(&[]), 0.0);
    }
}

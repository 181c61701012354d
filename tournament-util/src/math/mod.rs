use num_traits::Float;

pub mod position;
pub mod vector3;

/// Linear interpolation between `start` and `end`. `delta` is not clamped.
#[inline]
pub fn lerp<T: Float>(start: T, end: T, delta: T) -> T {
    start + delta * (end - start)
}

#[inline]
pub fn clamp_lerp<T: Float>(start: T, end: T, delta: T) -> T {
    if delta < T::zero() {
        start
    } else if delta > T::one() {
        end
    } else {
        lerp(start, end, delta)
    }
}

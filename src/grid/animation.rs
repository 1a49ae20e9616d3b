//! Frame-driven animation primitives.
//!
//! Nothing here reads a clock. Callers advance animations with `tick(dt)`
//! once per frame, which keeps every animation deterministic under test.

use super::geometry::Point;
use std::time::Duration;

/// Easing curve mapping linear progress `t ∈ [0, 1]` to eased progress.
pub type EasingFn = fn(f64) -> f64;

/// Identity easing.
pub fn linear(t: f64) -> f64 {
    t
}

/// Cubic ease-in-out: slow start, fast middle, slow end.
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Default duration of a settle animation.
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(350);

/// Time-based interpolation of one scalar.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Animate from `from` to `to` over `duration` with [`ease_in_out`].
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: ease_in_out,
        }
    }

    /// A finished tween resting at `value`.
    pub fn at_rest(value: f64) -> Self {
        Self::new(value, value, Duration::ZERO)
    }

    /// Replace the easing curve.
    pub fn with_easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Advance by `dt`, saturating at the end.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Current interpolated value.
    pub fn value(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        let eased = (self.easing)(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Destination value.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Whether the tween has reached its destination.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Start a new tween from the current value towards `to`.
    pub fn retarget(&mut self, to: f64, duration: Duration) {
        *self = Tween::new(self.value(), to, duration).with_easing(self.easing);
    }
}

/// A point animated along both axes.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedPoint {
    x: Tween,
    y: Tween,
}

impl AnimatedPoint {
    /// A point resting at `point`.
    pub fn at(point: Point) -> Self {
        Self {
            x: Tween::at_rest(point.x),
            y: Tween::at_rest(point.y),
        }
    }

    /// Current displayed coordinates.
    pub fn value(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    /// Where the point is heading.
    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    /// Animate from the current value to `target`.
    pub fn animate_to(&mut self, target: Point, duration: Duration) {
        self.x.retarget(target.x, duration);
        self.y.retarget(target.y, duration);
    }

    /// Jump to `point` without animating. Cancels any running animation.
    pub fn jump_to(&mut self, point: Point) {
        *self = Self::at(point);
    }

    /// Advance both axes.
    pub fn tick(&mut self, dt: Duration) {
        self.x.tick(dt);
        self.y.tick(dt);
    }

    /// Whether both axes have arrived.
    pub fn is_complete(&self) -> bool {
        self.x.is_complete() && self.y.is_complete()
    }
}

/// Maximum integration step. Larger frame deltas are subdivided.
const MAX_SPRING_STEP: f64 = 0.004;

/// Position delta below which a spring may be considered at rest.
const REST_DISPLACEMENT: f64 = 0.001;

/// Velocity below which a spring may be considered at rest.
const REST_VELOCITY: f64 = 0.01;

/// Damped harmonic oscillator (unit mass).
///
///   F = -stiffness × (position - target) - damping × velocity
///
/// Integrated with semi-implicit Euler. The default constants
/// (stiffness 100, damping 10) are slightly underdamped, so the value
/// overshoots a little before settling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
}

impl Spring {
    /// A spring resting at `value`.
    pub fn new(value: f64) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
            stiffness: 100.0,
            damping: 10.0,
        }
    }

    /// Override stiffness (clamped to a small positive minimum).
    #[cfg(test)]
    pub(crate) fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness.max(0.1);
        self
    }

    /// Override damping (clamped to be non-negative).
    #[cfg(test)]
    pub(crate) fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping.max(0.0);
        self
    }

    /// Current value.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Value the spring is pulled towards.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Change the target, keeping current momentum.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Whether the spring has effectively stopped at its target.
    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < REST_DISPLACEMENT
            && self.velocity.abs() < REST_VELOCITY
    }

    /// Advance the simulation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return;
        }

        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step = remaining.min(MAX_SPRING_STEP);
            let force =
                -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
            self.velocity += force * step;
            self.position += self.velocity * step;
            remaining -= step;
        }

        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_16: Duration = Duration::from_millis(16);

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [linear as EasingFn, ease_in_out] {
            assert!((easing(0.0) - 0.0).abs() < 1e-9);
            assert!((easing(1.0) - 1.0).abs() < 1e-9);
        }
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn ease_in_out_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_in_out(i as f64 / 100.0);
            assert!(v >= prev - 1e-9, "easing should be monotonic at step {}", i);
            prev = v;
        }
    }

    #[test]
    fn tween_reaches_target_after_duration() {
        let mut tween = Tween::new(0.0, 100.0, DEFAULT_SETTLE_DURATION);
        assert!(!tween.is_complete());
        tween.tick(Duration::from_millis(100));
        let midway = tween.value();
        assert!(midway > 0.0 && midway < 100.0, "got {}", midway);
        tween.tick(Duration::from_millis(250));
        assert!(tween.is_complete());
        assert_eq!(tween.value(), 100.0);
    }

    #[test]
    fn tween_saturates_on_large_tick() {
        let mut tween = Tween::new(10.0, 20.0, Duration::from_millis(50)).with_easing(linear);
        tween.tick(Duration::from_secs(5));
        assert_eq!(tween.value(), 20.0);
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn zero_duration_tween_is_complete() {
        let tween = Tween::at_rest(42.0);
        assert!(tween.is_complete());
        assert_eq!(tween.value(), 42.0);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let mut tween = Tween::new(0.0, 100.0, Duration::from_millis(100)).with_easing(linear);
        tween.tick(Duration::from_millis(50));
        tween.retarget(0.0, Duration::from_millis(100));
        assert!((tween.value() - 50.0).abs() < 1e-9);
        assert_eq!(tween.target(), 0.0);
    }

    #[test]
    fn animated_point_completes_on_both_axes() {
        let mut point = AnimatedPoint::at(Point::ZERO);
        point.animate_to(Point::new(100.0, 100.0), DEFAULT_SETTLE_DURATION);
        assert_eq!(point.target(), Point::new(100.0, 100.0));
        let mut frames = 0;
        while !point.is_complete() {
            point.tick(MS_16);
            frames += 1;
            assert!(frames < 100, "animation should finish");
        }
        assert_eq!(point.value(), Point::new(100.0, 100.0));
    }

    #[test]
    fn jump_to_cancels_animation() {
        let mut point = AnimatedPoint::at(Point::ZERO);
        point.animate_to(Point::new(50.0, 50.0), DEFAULT_SETTLE_DURATION);
        point.jump_to(Point::new(7.0, 9.0));
        assert!(point.is_complete());
        assert_eq!(point.value(), Point::new(7.0, 9.0));
    }

    #[test]
    fn spring_settles_on_target() {
        let mut spring = Spring::new(1.0);
        spring.set_target(1.05);
        for _ in 0..300 {
            spring.tick(MS_16);
        }
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), 1.05);
    }

    #[test]
    fn spring_at_rest_does_not_move() {
        let mut spring = Spring::new(1.0);
        spring.tick(Duration::from_secs(1));
        assert_eq!(spring.position(), 1.0);
    }

    #[test]
    fn spring_moves_towards_target() {
        let mut spring = Spring::new(0.0).with_stiffness(200.0).with_damping(30.0);
        spring.set_target(1.0);
        spring.tick(Duration::from_millis(50));
        assert!(spring.position() > 0.0);
        assert!(spring.position() < 1.0);
        assert_eq!(spring.target(), 1.0);
    }
}

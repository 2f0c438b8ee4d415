/// Spring tuning shared by a family of animated values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Noticeable bounce without excess. Nav geometry and entrances.
    pub const BOUNCY: Self = Self {
        stiffness: 100.0,
        damping: 16.0,
        mass: 1.0,
    };

    /// Settles faster with barely any overshoot. Opacity-like values.
    pub const TIGHT: Self = Self {
        stiffness: 120.0,
        damping: 18.0,
        mass: 0.9,
    };

    /// Heavy smoothing for raw pointer input.
    pub const TILT: Self = Self {
        stiffness: 300.0,
        damping: 30.0,
        mass: 1.0,
    };

    /// Quick response for hover state.
    pub const SNAPPY: Self = Self {
        stiffness: 400.0,
        damping: 25.0,
        mass: 0.8,
    };

    /// Navbar mount pose.
    pub const ENTRANCE: Self = Self {
        stiffness: 180.0,
        damping: 22.0,
        mass: 0.8,
    };
}

// Rest thresholds below which the spring snaps onto its target.
const REST_DELTA: f64 = 0.001;
const REST_SPEED: f64 = 0.001;

// A backgrounded tab can hand us a multi-second frame delta.
const MAX_DT: f64 = 0.064;

// The stiffest tunings diverge under Euler steps past ~40 ms, so frames
// are integrated in fixed substeps.
const SUBSTEP: f64 = 0.008;

/// Critically-under-damped second-order filter, stepped once per
/// animation frame toward a retargetable rest value.
#[derive(Clone, Debug)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    /// A spring at rest on `initial`.
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            config,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Retargets without disturbing position or velocity.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Advance by `dt` seconds of wall-clock time.
    pub fn step(&mut self, dt: f64) {
        if self.is_settled() {
            return;
        }

        let mut remaining = dt.clamp(0.0, MAX_DT);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let displacement = self.position - self.target;
            let accel = (-self.config.stiffness * displacement
                - self.config.damping * self.velocity)
                / self.config.mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.at_rest()
    }

    fn at_rest(&self) -> bool {
        (self.position - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    const ALL_TUNINGS: [SpringConfig; 5] = [
        SpringConfig::BOUNCY,
        SpringConfig::TIGHT,
        SpringConfig::TILT,
        SpringConfig::SNAPPY,
        SpringConfig::ENTRANCE,
    ];

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.step(FRAME);
        }
    }

    #[test]
    fn settles_on_target_from_any_tuning() {
        for config in ALL_TUNINGS {
            let mut spring = Spring::new(0.0, config);
            spring.set_target(1.0);
            run(&mut spring, 600);
            assert!(spring.is_settled(), "{config:?} did not settle");
            assert!((spring.position() - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn transient_overshoot_is_bounded() {
        for config in ALL_TUNINGS {
            let mut spring = Spring::new(0.0, config);
            spring.set_target(1.0);
            let mut max = 0.0f64;
            for _ in 0..600 {
                spring.step(FRAME);
                max = max.max(spring.position());
            }
            assert!(max <= 1.05, "{config:?} overshot to {max}");
        }
    }

    #[test]
    fn settled_spring_stays_put() {
        let mut spring = Spring::new(5.0, SpringConfig::BOUNCY);
        assert!(spring.is_settled());
        run(&mut spring, 10);
        assert_eq!(spring.position(), 5.0);
    }

    #[test]
    fn survives_large_frame_gaps() {
        let mut spring = Spring::new(0.0, SpringConfig::SNAPPY);
        spring.set_target(1.0);
        // Tab restored after seconds away, repeatedly.
        for _ in 0..200 {
            spring.step(10.0);
        }
        assert!(spring.position().is_finite());
        assert!(spring.is_settled());
        assert!((spring.position() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn retarget_keeps_motion_state() {
        let mut spring = Spring::new(0.0, SpringConfig::BOUNCY);
        spring.set_target(1.0);
        run(&mut spring, 5);
        let moving_position = spring.position();
        assert!(moving_position > 0.0);

        spring.set_target(2.0);
        assert_eq!(spring.position(), moving_position);
        run(&mut spring, 600);
        assert!((spring.position() - 2.0).abs() < 1e-3);
    }

    #[test]
    fn settles_over_the_nav_width_range() {
        let mut spring = Spring::new(100.0, SpringConfig::BOUNCY);
        spring.set_target(28.0);
        run(&mut spring, 600);
        assert!(spring.is_settled());
        assert!((spring.position() - 28.0).abs() < 1e-2);
    }

    #[test]
    fn negative_dt_is_ignored() {
        let mut spring = Spring::new(0.0, SpringConfig::TILT);
        spring.set_target(1.0);
        spring.step(-1.0);
        assert_eq!(spring.position(), 0.0);
    }
}

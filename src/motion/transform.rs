/// Linear map of `v` from `[in_min, in_max]` to `[out_min, out_max]`,
/// held at the output endpoints outside the input range. The output
/// range may run backwards (e.g. 100 down to 28).
pub fn map_range(v: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if (in_max - in_min).abs() < f64::EPSILON {
        return out_min;
    }
    let t = ((v - in_min) / (in_max - in_min)).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * t
}

pub type Rgb = (u8, u8, u8);

/// Per-channel blend between two colors. `t` is clamped so spring
/// overshoot cannot leave the RGB cube.
pub fn mix_rgb(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    (
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

pub fn rgb_css((r, g, b): Rgb) -> String {
    format!("rgb({r}, {g}, {b})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_start_value_below_range() {
        assert_eq!(map_range(0.0, 40.0, 120.0, 100.0, 28.0), 100.0);
        assert_eq!(map_range(40.0, 40.0, 120.0, 100.0, 28.0), 100.0);
    }

    #[test]
    fn holds_end_value_past_range() {
        assert_eq!(map_range(120.0, 40.0, 120.0, 0.0, 0.5), 0.5);
        assert_eq!(map_range(5000.0, 40.0, 120.0, 0.0, 0.5), 0.5);
    }

    #[test]
    fn interpolates_midpoint() {
        assert_eq!(map_range(80.0, 40.0, 120.0, 0.0, 20.0), 10.0);
        assert_eq!(map_range(80.0, 40.0, 120.0, 100.0, 28.0), 64.0);
    }

    #[test]
    fn monotonic_inside_range() {
        let mut previous = f64::INFINITY;
        for step in 0..=80 {
            let v = map_range(40.0 + step as f64, 40.0, 120.0, 100.0, 28.0);
            assert!(v < previous || step == 0, "descending map not monotonic");
            previous = v;
        }
    }

    #[test]
    fn degenerate_input_range_yields_start() {
        assert_eq!(map_range(7.0, 3.0, 3.0, 1.0, 9.0), 1.0);
    }

    #[test]
    fn color_blend_is_exact_at_endpoints() {
        let neutral = (232, 232, 232);
        let accent = (139, 225, 130);
        assert_eq!(mix_rgb(neutral, accent, 0.0), neutral);
        assert_eq!(mix_rgb(neutral, accent, 1.0), accent);
    }

    #[test]
    fn color_blend_clamps_overshoot() {
        let neutral = (232, 232, 232);
        let accent = (139, 225, 130);
        assert_eq!(mix_rgb(neutral, accent, 1.04), accent);
        assert_eq!(mix_rgb(neutral, accent, -0.2), neutral);
    }

    #[test]
    fn rgb_css_formats() {
        assert_eq!(rgb_css((139, 225, 130)), "rgb(139, 225, 130)");
    }
}

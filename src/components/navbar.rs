use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::motion::hooks::{use_reveal, use_spring};
use crate::motion::spring::SpringConfig;
use crate::motion::transform::map_range;
use crate::Route;

// Scroll band over which the bar morphs from full-width strip to pill.
const SCROLL_START: f64 = 40.0;
const SCROLL_END: f64 = 120.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavTargets {
    pub width_pct: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    pub radius: f64,
    pub bg_opacity: f64,
    pub blur: f64,
    pub border_opacity: f64,
    pub shadow_opacity: f64,
}

/// Steady-state style targets for a scroll offset. Every parameter rides
/// the same [40, 120] px band; the springs downstream add the lag.
pub fn nav_targets(scroll_y: f64) -> NavTargets {
    let over = |out_start, out_end| map_range(scroll_y, SCROLL_START, SCROLL_END, out_start, out_end);
    NavTargets {
        width_pct: over(100.0, 28.0),
        padding_x: over(24.0, 32.0),
        padding_y: over(24.0, 20.0),
        radius: over(12.0, 50.0),
        bg_opacity: over(0.0, 0.5),
        blur: over(0.0, 20.0),
        border_opacity: over(0.0, 0.12),
        shadow_opacity: over(0.0, 0.5),
    }
}

/// The percentage basis is pinned to real pixels at render time.
pub fn nav_width_css(width_pct: f64) -> String {
    format!("clamp(340px, {width_pct:.2}%, 1200px)")
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scroll_y = use_state(|| 0.0);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                // Seed with the live offset, the page may load mid-scroll.
                if let Ok(y) = window.scroll_y() {
                    scroll_y.set(y);
                }

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Ok(y) = window_clone.scroll_y() {
                        scroll_y.set(y);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let targets = nav_targets(*scroll_y);

    let width = use_spring(targets.width_pct, SpringConfig::BOUNCY);
    let padding_x = use_spring(targets.padding_x, SpringConfig::BOUNCY);
    let padding_y = use_spring(targets.padding_y, SpringConfig::BOUNCY);
    let radius = use_spring(targets.radius, SpringConfig::BOUNCY);
    let bg_opacity = use_spring(targets.bg_opacity, SpringConfig::TIGHT);
    let blur = use_spring(targets.blur, SpringConfig::TIGHT);
    let border_opacity = use_spring(targets.border_opacity, SpringConfig::TIGHT);
    let shadow_opacity = use_spring(targets.shadow_opacity, SpringConfig::TIGHT);

    let entrance = use_reveal(true, 50, SpringConfig::ENTRANCE);
    let logo_entrance = use_reveal(true, 150, SpringConfig::ENTRANCE);
    let link_entrance = use_reveal(true, 200, SpringConfig::ENTRANCE);

    // Opacities clamp (overshoot is invalid CSS there); transforms keep
    // the raw spring value so the bounce stays visible.
    let nav_style = format!(
        "width: {}; padding: {:.2}px {:.2}px; border-radius: {:.2}px; \
         background-color: rgba(18, 18, 18, {:.3}); \
         backdrop-filter: blur({:.2}px); -webkit-backdrop-filter: blur({:.2}px); \
         border: 1px solid rgba(255, 255, 255, {:.3}); \
         box-shadow: 0 8px 32px rgba(0, 0, 0, {:.3}), 0 0 0 1px rgba(255, 255, 255, {:.4}) inset; \
         opacity: {:.3}; transform: translateY({:.2}px) scale({:.4});",
        nav_width_css(width),
        padding_y.max(0.0),
        padding_x.max(0.0),
        radius.max(0.0),
        bg_opacity.clamp(0.0, 1.0),
        blur.max(0.0),
        blur.max(0.0),
        border_opacity.clamp(0.0, 1.0),
        shadow_opacity.clamp(0.0, 1.0),
        (shadow_opacity * 0.1).clamp(0.0, 1.0),
        entrance.clamp(0.0, 1.0),
        -24.0 * (1.0 - entrance),
        0.96 + 0.04 * entrance,
    );

    let logo_style = format!(
        "opacity: {:.3}; transform: translateX({:.2}px);",
        logo_entrance.clamp(0.0, 1.0),
        -16.0 * (1.0 - logo_entrance),
    );
    let link_style = format!(
        "opacity: {:.3}; transform: translateX({:.2}px);",
        link_entrance.clamp(0.0, 1.0),
        16.0 * (1.0 - link_entrance),
    );

    html! {
        <header class="navbar-shell">
            <nav class="navbar-pill" style={nav_style}>
                <div style={logo_style}>
                    <Link<Route> to={Route::Home} classes="navbar-logo">
                        {"KyronHQ"}
                    </Link<Route>>
                </div>
                <div style={link_style}>
                    <Link<Route> to={Route::About} classes="navbar-link">
                        {"About"}
                    </Link<Route>>
                </div>
            </nav>
            <style>
                {r#"
                .navbar-shell {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    justify-content: center;
                    padding: 16px 16px 0;
                    pointer-events: none;
                }

                .navbar-pill {
                    pointer-events: auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .navbar-logo {
                    font-size: 1.125rem;
                    font-weight: 600;
                    letter-spacing: -0.02em;
                    color: #e8e8e8;
                    text-decoration: none;
                    display: inline-block;
                    transition: transform 0.2s ease;
                }

                .navbar-logo:hover {
                    transform: scale(1.03);
                }

                .navbar-logo:active {
                    transform: scale(0.97);
                }

                .navbar-link {
                    position: relative;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #999;
                    text-decoration: none;
                    padding: 4px 0;
                    display: inline-block;
                    transition: color 0.2s ease, transform 0.2s ease;
                }

                .navbar-link:hover {
                    color: #e8e8e8;
                    transform: scale(1.06);
                }

                .navbar-link:active {
                    transform: scale(0.95);
                }

                .navbar-link::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: -2px;
                    height: 1.5px;
                    border-radius: 999px;
                    background: #8be182;
                    transform: scaleX(0);
                    transform-origin: left;
                    transition: transform 0.25s ease;
                }

                .navbar-link:hover::after {
                    transform: scaleX(1);
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_targets_below_the_band() {
        for scroll in [0.0, 25.0, 40.0] {
            let t = nav_targets(scroll);
            assert_eq!(t.width_pct, 100.0);
            assert_eq!(t.padding_x, 24.0);
            assert_eq!(t.padding_y, 24.0);
            assert_eq!(t.radius, 12.0);
            assert_eq!(t.bg_opacity, 0.0);
            assert_eq!(t.blur, 0.0);
            assert_eq!(t.border_opacity, 0.0);
            assert_eq!(t.shadow_opacity, 0.0);
        }
    }

    #[test]
    fn pill_targets_past_the_band() {
        for scroll in [120.0, 200.0, 10_000.0] {
            let t = nav_targets(scroll);
            assert_eq!(t.width_pct, 28.0);
            assert_eq!(t.padding_x, 32.0);
            assert_eq!(t.padding_y, 20.0);
            assert_eq!(t.radius, 50.0);
            assert_eq!(t.bg_opacity, 0.5);
            assert_eq!(t.blur, 20.0);
            assert_eq!(t.border_opacity, 0.12);
            assert_eq!(t.shadow_opacity, 0.5);
        }
    }

    #[test]
    fn targets_are_monotonic_inside_the_band() {
        let mut previous = nav_targets(40.0);
        for step in 1..=80 {
            let current = nav_targets(40.0 + step as f64);
            assert!(current.width_pct < previous.width_pct);
            assert!(current.padding_x > previous.padding_x);
            assert!(current.padding_y < previous.padding_y);
            assert!(current.radius > previous.radius);
            assert!(current.bg_opacity > previous.bg_opacity);
            assert!(current.blur > previous.blur);
            assert!(current.border_opacity > previous.border_opacity);
            assert!(current.shadow_opacity > previous.shadow_opacity);
            previous = current;
        }
    }

    #[test]
    fn width_never_leaves_the_pixel_bounds() {
        // clamp(min, v, max), as the browser resolves the formatted width.
        let resolved = |pct: f64, viewport: f64| ((pct / 100.0) * viewport).clamp(340.0, 1200.0);
        for viewport in [320.0, 768.0, 1440.0, 3840.0] {
            for scroll in [0.0, 40.0, 80.0, 120.0, 200.0, 5000.0] {
                let px = resolved(nav_targets(scroll).width_pct, viewport);
                assert!((340.0..=1200.0).contains(&px), "{px} out of bounds");
            }
        }
    }

    #[test]
    fn width_css_carries_both_bounds() {
        let css = nav_width_css(64.0);
        assert_eq!(css, "clamp(340px, 64.00%, 1200px)");
    }
}

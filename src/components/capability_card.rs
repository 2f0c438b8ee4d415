use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_visible;

use crate::motion::hooks::{use_reveal, use_spring};
use crate::motion::spring::SpringConfig;
use crate::motion::transform::{map_range, mix_rgb, rgb_css, Rgb};

const TILT_RANGE_DEG: f64 = 8.0;

const TITLE_NEUTRAL: Rgb = (232, 232, 232);
const TITLE_ACCENT: Rgb = (139, 225, 130);

#[derive(Properties, PartialEq)]
pub struct CapabilityCardProps {
    pub title: String,
    pub description: String,
    pub index: u32,
}

/// `(rotate_x, rotate_y)` in degrees for a pointer normalized to the
/// card's bounding box. The vertical axis is inverted so the card tips
/// toward the pointer instead of away from it.
pub fn tilt_rotation(x: f64, y: f64) -> (f64, f64) {
    (
        map_range(y, 0.0, 1.0, TILT_RANGE_DEG, -TILT_RANGE_DEG),
        map_range(x, 0.0, 1.0, -TILT_RANGE_DEG, TILT_RANGE_DEG),
    )
}

pub fn entrance_delay_ms(index: u32) -> u32 {
    100 + index * 80
}

#[function_component(CapabilityCard)]
pub fn capability_card(props: &CapabilityCardProps) -> Html {
    let card_ref = use_node_ref();
    let hovered = use_state(|| false);
    let mouse_x = use_state(|| 0.5);
    let mouse_y = use_state(|| 0.5);

    let smooth_x = use_spring(*mouse_x, SpringConfig::TILT);
    let smooth_y = use_spring(*mouse_y, SpringConfig::TILT);
    let (rotate_x, rotate_y) = tilt_rotation(smooth_x, smooth_y);

    let hover_blend = use_spring(if *hovered { 1.0 } else { 0.0 }, SpringConfig::SNAPPY);

    let visible = use_visible(card_ref.clone(), true);
    let entrance = use_reveal(visible, entrance_delay_ms(props.index), SpringConfig::BOUNCY);

    let onmousemove = {
        let card_ref = card_ref.clone();
        let mouse_x = mouse_x.clone();
        let mouse_y = mouse_y.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let rect = card.get_bounding_client_rect();
                if rect.width() > 0.0 && rect.height() > 0.0 {
                    mouse_x.set((e.client_x() as f64 - rect.left()) / rect.width());
                    mouse_y.set((e.client_y() as f64 - rect.top()) / rect.height());
                }
            }
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        let mouse_x = mouse_x.clone();
        let mouse_y = mouse_y.clone();
        Callback::from(move |_: MouseEvent| {
            // Back to center, the tilt springs carry it home.
            mouse_x.set(0.5);
            mouse_y.set(0.5);
            hovered.set(false);
        })
    };

    // Opacity clamps, transforms keep the raw spring value so the
    // bounce stays visible.
    let entered = entrance.clamp(0.0, 1.0);
    let translate_y = 40.0 * (1.0 - entrance) - 8.0 * hover_blend;
    let scale = 1.0 + 0.02 * hover_blend;

    let card_style = format!(
        "transform: perspective(800px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) \
         translateY({translate_y:.2}px) scale({scale:.4}); opacity: {entered:.3};",
    );
    let title_style = format!(
        "color: {};",
        rgb_css(mix_rgb(TITLE_NEUTRAL, TITLE_ACCENT, hover_blend))
    );

    html! {
        <div
            ref={card_ref}
            class="capability-card"
            style={card_style}
            onmousemove={onmousemove}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <div class={classes!("card-glow", (*hovered).then(|| "card-glow-on"))}></div>
            <h3 class="card-title" style={title_style}>{ &props.title }</h3>
            <p class="card-description">{ &props.description }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_means_no_tilt() {
        let (rx, ry) = tilt_rotation(0.5, 0.5);
        assert_eq!(rx, 0.0);
        assert_eq!(ry, 0.0);
    }

    #[test]
    fn top_left_corner_tips_up_and_left() {
        let (rx, ry) = tilt_rotation(0.0, 0.0);
        assert_eq!(rx, 8.0);
        assert_eq!(ry, -8.0);
    }

    #[test]
    fn bottom_right_corner_tips_down_and_right() {
        let (rx, ry) = tilt_rotation(1.0, 1.0);
        assert_eq!(rx, -8.0);
        assert_eq!(ry, 8.0);
    }

    #[test]
    fn rotation_is_clamped_outside_the_box() {
        // Pointer coordinates can land outside the rect between move
        // and leave events.
        let (rx, ry) = tilt_rotation(1.4, -0.3);
        assert_eq!(rx, 8.0);
        assert_eq!(ry, 8.0);
    }

    #[test]
    fn entrance_delays_stagger_by_card_index() {
        assert_eq!(entrance_delay_ms(0), 100);
        assert_eq!(entrance_delay_ms(1), 180);
        assert_eq!(entrance_delay_ms(2), 260);
    }
}

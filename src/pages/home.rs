use log::debug;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::use_visible;

use crate::components::capability_card::CapabilityCard;
use crate::motion::hooks::use_reveal;
use crate::motion::spring::SpringConfig;

// Headline enters first, each hero element 80 ms behind the previous.
const HERO_BASE_DELAY_MS: u32 = 200;
const HERO_STAGGER_MS: u32 = 80;

pub fn hero_stagger_delay_ms(index: u32) -> u32 {
    HERO_BASE_DELAY_MS + index * HERO_STAGGER_MS
}

fn entrance_style(progress: f64, rise_px: f64) -> String {
    format!(
        "opacity: {:.3}; transform: translateY({:.2}px);",
        progress.clamp(0.0, 1.0),
        rise_px * (1.0 - progress),
    )
}

#[function_component(Home)]
pub fn home() -> Html {
    let capabilities_ref = use_node_ref();
    let section_header_ref = use_node_ref();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let headline = use_reveal(true, hero_stagger_delay_ms(0), SpringConfig::BOUNCY);
    let subtext = use_reveal(true, hero_stagger_delay_ms(1), SpringConfig::BOUNCY);
    let cta = use_reveal(true, hero_stagger_delay_ms(2), SpringConfig::BOUNCY);

    let header_visible = use_visible(section_header_ref.clone(), true);
    let header_entrance = use_reveal(header_visible, 0, SpringConfig::BOUNCY);

    let scroll_to_capabilities = {
        let capabilities_ref = capabilities_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(section) = capabilities_ref.cast::<HtmlElement>() {
                if let Some(window) = web_sys::window() {
                    let options = ScrollToOptions::new();
                    options.set_top(section.offset_top() as f64);
                    options.set_behavior(ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&options);
                }
            } else {
                // Section not mounted yet, nothing to scroll to.
                debug!("capabilities section ref unset, skipping scroll");
            }
        })
    };

    html! {
        <main class="home-page">
            <section class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1 class="hero-headline" style={entrance_style(headline, 30.0)}>
                        {"We build execution systems."}
                    </h1>
                    <p class="hero-subtext" style={entrance_style(subtext, 24.0)}>
                        {"Automation, software, and infrastructure—engineered for leverage."}
                    </p>
                    <div class="hero-cta" style={entrance_style(cta, 20.0)}>
                        <button class="cta-button" onclick={scroll_to_capabilities}>
                            {"Explore"}
                        </button>
                    </div>
                </div>
            </section>

            <section ref={capabilities_ref} id="capabilities" class="capabilities">
                <div class="capabilities-inner">
                    <div
                        ref={section_header_ref}
                        class="section-header"
                        style={entrance_style(header_entrance, 30.0)}
                    >
                        <h2>{"Capabilities"}</h2>
                    </div>
                    <div class="capabilities-grid">
                        <CapabilityCard
                            title="Automation"
                            description="Systems that run without intervention."
                            index={0}
                        />
                        <CapabilityCard
                            title="Software"
                            description="Purpose-built tools for specific problems."
                            index={1}
                        />
                        <CapabilityCard
                            title="Infrastructure"
                            description="Foundations that scale with demand."
                            index={2}
                        />
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                }

                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1.5rem;
                    position: relative;
                    overflow: hidden;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    background:
                        radial-gradient(ellipse 60% 50% at 50% 40%,
                            rgba(139, 225, 130, 0.12) 0%,
                            rgba(139, 225, 130, 0.04) 45%,
                            transparent 70%),
                        #000;
                    pointer-events: none;
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                    pointer-events: none;
                }

                .hero-headline {
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 600;
                    letter-spacing: -0.02em;
                    line-height: 1.1;
                    color: #e8e8e8;
                }

                .hero-subtext {
                    margin-top: 2rem;
                    font-size: clamp(1.125rem, 2vw, 1.25rem);
                    color: #999;
                    max-width: 36rem;
                    margin-left: auto;
                    margin-right: auto;
                    line-height: 1.6;
                }

                .hero-cta {
                    margin-top: 3rem;
                    pointer-events: auto;
                }

                .cta-button {
                    border: none;
                    border-radius: 999px;
                    padding: 1.1rem 2rem;
                    font-size: 1rem;
                    font-weight: 500;
                    background: #fff;
                    color: #0b0b0b;
                    cursor: pointer;
                    transition: background 0.2s ease, transform 0.2s ease;
                }

                .cta-button:hover {
                    background: #f3f3f3;
                    transform: scale(1.03);
                }

                .cta-button:active {
                    background: #e4e4e4;
                    transform: scale(0.97);
                }

                .capabilities {
                    min-height: 100vh;
                    padding: 8rem 1.5rem;
                    background: #0b0b0b;
                }

                .capabilities-inner {
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 5rem;
                }

                .section-header h2 {
                    font-size: clamp(2.5rem, 5vw, 3rem);
                    font-weight: 600;
                    color: #e8e8e8;
                }

                .capabilities-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .capability-card {
                    position: relative;
                    padding: 2rem;
                    border-radius: 16px;
                    background: #161616;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    cursor: default;
                    overflow: hidden;
                    transform-style: preserve-3d;
                }

                .card-glow {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    transform-origin: top left;
                    background: radial-gradient(ellipse at top left,
                        rgba(139, 225, 130, 0.25) 0%,
                        rgba(139, 225, 130, 0.1) 30%,
                        transparent 60%);
                    opacity: 0;
                    transform: scale(0.8);
                    transition: opacity 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94),
                                transform 0.5s cubic-bezier(0.25, 0.46, 0.45, 0.94);
                }

                .card-glow-on {
                    opacity: 1;
                    transform: scale(1);
                }

                .card-title {
                    position: relative;
                    z-index: 1;
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.75rem;
                }

                .card-description {
                    position: relative;
                    z-index: 1;
                    margin: 0;
                    color: #999;
                    line-height: 1.6;
                }

                @media (max-width: 900px) {
                    .capabilities-grid {
                        grid-template-columns: 1fr;
                    }

                    .capabilities {
                        padding: 5rem 1rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_elements_enter_in_strict_order() {
        let delays: Vec<u32> = (0..3).map(hero_stagger_delay_ms).collect();
        assert!(delays[0] < delays[1] && delays[1] < delays[2]);
    }

    #[test]
    fn hero_stagger_increment_is_exact() {
        for index in 1..3 {
            assert_eq!(
                hero_stagger_delay_ms(index) - hero_stagger_delay_ms(index - 1),
                80
            );
        }
    }

    #[test]
    fn entrance_style_clamps_opacity_but_not_travel() {
        // Overshooting progress keeps the transform moving past rest while
        // opacity pins at fully visible.
        let css = entrance_style(1.02, 30.0);
        assert!(css.contains("opacity: 1.000"));
        assert!(css.contains("translateY(-0.60px)"));
    }

    #[test]
    fn entrance_style_at_rest_is_identity() {
        let css = entrance_style(1.0, 30.0);
        assert!(css.contains("opacity: 1.000"));
        assert!(css.contains("translateY(0.00px)"));
    }
}

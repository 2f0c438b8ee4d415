use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
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

    html! {
        <div class="about-page">
            <section class="about-hero">
                <h1>{"About Kyron"}</h1>
                <p>
                    {"Kyron is a small studio that designs and operates execution systems: \
                      the automation, software, and infrastructure that let lean teams move \
                      like large ones. We take on a handful of engagements at a time and \
                      stay close to the work."}
                </p>
            </section>

            <section class="about-section">
                <div class="about-content">
                    <h2>{"How we work"}</h2>
                    <p>
                        {"We start from the outcome a system has to produce, not the stack it \
                          should be built on. Most engagements begin with a short diagnostic, \
                          continue through a build phase with weekly working sessions, and end \
                          with your team running the system without us."}
                    </p>
                    <p>
                        {"Everything we ship is instrumented, documented, and boring to \
                          operate. If it needs a person watching it, it isn't finished."}
                    </p>
                </div>
            </section>

            <section class="about-section alternate">
                <div class="about-content">
                    <h2>{"Where to find us"}</h2>
                    <p>
                        {"We work remotely across European and US timezones. The fastest way \
                          to reach us is a short note about the problem you're trying to make \
                          disappear."}
                    </p>
                </div>
            </section>

            <style>
                {r#"
                .about-page {
                    padding-top: 120px;
                    min-height: 100vh;
                    background: #0b0b0b;
                }

                .about-hero {
                    text-align: center;
                    padding: 4rem 2rem;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .about-hero h1 {
                    font-size: 3rem;
                    font-weight: 600;
                    letter-spacing: -0.02em;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #8be182);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .about-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    line-height: 1.8;
                }

                .about-section {
                    padding: 4rem 2rem;
                }

                .about-section.alternate {
                    background: rgba(139, 225, 130, 0.04);
                }

                .about-content {
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .about-content h2 {
                    font-size: 2rem;
                    font-weight: 600;
                    color: #e8e8e8;
                    margin-bottom: 1.5rem;
                }

                .about-content p {
                    color: #999;
                    font-size: 1.1rem;
                    line-height: 1.8;
                    margin-bottom: 1.5rem;
                }

                @media (max-width: 768px) {
                    .about-hero {
                        padding: 3rem 1rem;
                    }

                    .about-hero h1 {
                        font-size: 2.25rem;
                    }

                    .about-section {
                        padding: 3rem 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

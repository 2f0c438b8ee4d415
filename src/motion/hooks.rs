use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::spring::{Spring, SpringConfig};

// First frame has no previous timestamp to diff against.
const FALLBACK_DT: f64 = 1.0 / 60.0;

struct SpringLoop {
    spring: Spring,
    raf_id: Option<i32>,
    last_frame_ms: Option<f64>,
}

/// Follows `target` through a damped spring, re-rendering the component
/// every animation frame until the spring settles. The frame loop only
/// runs while the spring is in motion and is cancelled on unmount.
#[hook]
pub fn use_spring(target: f64, config: SpringConfig) -> f64 {
    let rendered = use_state_eq(|| target);
    let looper = use_mut_ref(|| SpringLoop {
        spring: Spring::new(target, config),
        raf_id: None,
        last_frame_ms: None,
    });
    let frame = use_mut_ref(|| None::<Closure<dyn FnMut(f64)>>);

    {
        let rendered = rendered.clone();
        let looper = looper.clone();
        let frame = frame.clone();
        use_effect_with_deps(
            move |&target| {
                looper.borrow_mut().spring.set_target(target);
                let idle = looper.borrow().raf_id.is_none();
                if idle && !looper.borrow().spring.is_settled() {
                    start_frame_loop(&looper, &frame, &rendered);
                }
                || ()
            },
            target,
        );
    }

    {
        let looper = looper.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(id) = looper.borrow_mut().raf_id.take() {
                        if let Some(window) = web_sys::window() {
                            let _ = window.cancel_animation_frame(id);
                        }
                    }
                }
            },
            (),
        );
    }

    *rendered
}

fn start_frame_loop(
    looper: &Rc<RefCell<SpringLoop>>,
    frame: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    rendered: &UseStateHandle<f64>,
) {
    looper.borrow_mut().last_frame_ms = None;

    let callback = {
        let looper = looper.clone();
        let frame = frame.clone();
        let rendered = rendered.clone();
        Closure::wrap(Box::new(move |now_ms: f64| {
            let (position, settled) = {
                let mut state = looper.borrow_mut();
                state.raf_id = None;
                let dt = match state.last_frame_ms.replace(now_ms) {
                    Some(previous) => ((now_ms - previous) / 1000.0).max(0.0),
                    None => FALLBACK_DT,
                };
                state.spring.step(dt);
                (state.spring.position(), state.spring.is_settled())
            };
            rendered.set(position);
            if !settled {
                request_frame(&looper, &frame);
            }
        }) as Box<dyn FnMut(f64)>)
    };

    // The previous closure is only replaced while no frame is pending.
    *frame.borrow_mut() = Some(callback);
    request_frame(looper, frame);
}

fn request_frame(
    looper: &Rc<RefCell<SpringLoop>>,
    frame: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
) {
    if let Some(window) = web_sys::window() {
        if let Some(callback) = frame.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                looper.borrow_mut().raf_id = Some(id);
            }
        }
    }
}

/// One-shot 0 to 1 progress. Arms the first time `armed` is true, waits
/// `delay_ms`, then springs toward 1. A latch, not a toggle: later
/// `armed = false` never rewinds it.
#[hook]
pub fn use_reveal(armed: bool, delay_ms: u32, config: SpringConfig) -> f64 {
    let target = use_state(|| 0.0);
    let fired = use_mut_ref(|| false);

    {
        let target = target.clone();
        let fired = fired.clone();
        use_effect_with_deps(
            move |&armed| {
                if armed && !*fired.borrow() {
                    *fired.borrow_mut() = true;
                    let timeout = Timeout::new(delay_ms, move || target.set(1.0));
                    timeout.forget();
                }
                || ()
            },
            armed,
        );
    }

    use_spring(*target, config)
}

//! Momentum Slide entry point
//!
//! On the web, mounts a vertical and a horizontal slide on the page. Natively,
//! runs a headless flick and prints the motion as JSON lines.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

    use momentum_slide::platform::web::{AnimationFrames, ElementLayout, StyleTransform};
    use momentum_slide::{Key, Slide, SlideError, SlideOptions, SlideResult};

    type WebSlide = Slide<AnimationFrames, StyleTransform, ElementLayout>;

    /// Content element inside each viewport
    const CONTENT_SELECTOR: &str = ".js-content";
    /// Optional JSON overrides on the viewport element
    const OPTIONS_ATTRIBUTE: &str = "data-slide";

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Momentum Slide starting...");

        let surfaces = [
            (
                ".js-content-viewport",
                SlideOptions::vertical()
                    .with_friction(0.9)
                    .with_keyboard(true)
                    .with_touch(true),
            ),
            (
                ".js-content-viewport-horizontal",
                SlideOptions::horizontal()
                    .with_friction(0.98)
                    .with_keyboard(true)
                    .with_touch(true),
            ),
        ];

        for (selector, options) in surfaces {
            match mount(selector, options) {
                Ok(slide) => log::info!(
                    "Mounted {} slide on {} (bounds {})",
                    slide.borrow().axis().as_str(),
                    selector,
                    slide.borrow().bounds_max()
                ),
                Err(e) => log::warn!("Skipping {}: {}", selector, e),
            }
        }
    }

    fn mount(selector: &str, defaults: SlideOptions) -> SlideResult<Rc<RefCell<WebSlide>>> {
        let window = web_sys::window().ok_or_else(|| SlideError::Js("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| SlideError::Js("no document".into()))?;

        let viewport = document
            .query_selector(selector)?
            .ok_or_else(|| SlideError::MissingElement(selector.to_string()))?;
        let content: HtmlElement = viewport
            .query_selector(CONTENT_SELECTOR)?
            .ok_or_else(|| SlideError::MissingElement(format!("{selector} {CONTENT_SELECTOR}")))?
            .dyn_into()
            .map_err(|_| SlideError::Js(format!("{CONTENT_SELECTOR} is not an HTML element")))?;

        let options = match viewport.get_attribute(OPTIONS_ATTRIBUTE) {
            Some(json) => defaults.merge_json(&json)?,
            None => defaults,
        };

        let (frames, frame_callback) = AnimationFrames::new();
        let layout = ElementLayout::new(viewport.clone(), content.clone().into());
        let slide = Slide::new(options, frames, StyleTransform::new(content), layout)?;
        let slide = Rc::new(RefCell::new(slide));

        // The frame closure holds a weak handle; the slide owns the closure slot
        {
            let weak = Rc::downgrade(&slide);
            *frame_callback.borrow_mut() = Some(Closure::new(move |_time: f64| {
                if let Some(slide) = weak.upgrade() {
                    slide.borrow_mut().on_frame();
                }
            }));
        }

        setup_input_handlers(&window, &viewport, slide.clone())?;
        Ok(slide)
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        viewport: &web_sys::Element,
        slide: Rc<RefCell<WebSlide>>,
    ) -> SlideResult<()> {
        let options = slide.borrow().options().clone();

        // Hover scopes keyboard input and page scrolling
        {
            let slide = slide.clone();
            listen(viewport, "mouseenter", move |_event| {
                slide.borrow_mut().on_pointer_enter();
                set_body_overflow(Some("hidden"));
            })?;
        }
        {
            let slide = slide.clone();
            listen(viewport, "mouseleave", move |_event| {
                slide.borrow_mut().on_pointer_leave();
                set_body_overflow(None);
            })?;
        }

        if options.mouse {
            {
                let slide = slide.clone();
                listen(viewport, "mousedown", move |event| {
                    if let Some(pos) = mouse_position(&event) {
                        if slide.borrow_mut().on_pointer_down(pos, js_sys::Date::now()) {
                            event.prevent_default();
                        }
                    }
                })?;
            }
            {
                let slide = slide.clone();
                listen(viewport, "mousemove", move |event| {
                    if let Some(pos) = mouse_position(&event) {
                        if slide.borrow_mut().on_pointer_move(pos, js_sys::Date::now()) {
                            event.prevent_default();
                        }
                    }
                })?;
            }
            {
                let slide = slide.clone();
                listen(viewport, "mouseup", move |_event| {
                    slide.borrow_mut().on_pointer_up();
                })?;
            }
        }

        if options.touch {
            {
                let slide = slide.clone();
                listen(viewport, "touchstart", move |event| {
                    if let Some(pos) = touch_position(&event) {
                        if slide.borrow_mut().on_pointer_down(pos, js_sys::Date::now()) {
                            event.prevent_default();
                        }
                    }
                })?;
            }
            {
                let slide = slide.clone();
                listen(viewport, "touchmove", move |event| {
                    if let Some(pos) = touch_position(&event) {
                        if slide.borrow_mut().on_pointer_move(pos, js_sys::Date::now()) {
                            event.prevent_default();
                        }
                    }
                })?;
            }
            {
                let slide = slide.clone();
                listen(viewport, "touchend", move |_event| {
                    slide.borrow_mut().on_pointer_up();
                })?;
            }
        }

        if options.keyboard {
            {
                let slide = slide.clone();
                listen(window, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let mut s = slide.borrow_mut();
                    if !s.keyboard_active() {
                        return;
                    }
                    let Some(key) = Key::from_event(&event.key(), event.key_code()) else {
                        return;
                    };
                    // Arrows for the other axis keep their default page scroll
                    if key.direction_on(s.axis()).is_some() {
                        event.prevent_default();
                        s.on_key_down(key);
                    }
                })?;
            }
            {
                let slide = slide.clone();
                listen(window, "keyup", move |_event| {
                    let mut s = slide.borrow_mut();
                    if s.keyboard_active() {
                        s.on_key_up();
                    }
                })?;
            }
        }

        listen(window, "resize", move |_event| {
            slide.borrow_mut().on_resize();
        })?;

        Ok(())
    }

    /// Register a listener that lives as long as the page
    fn listen(
        target: &EventTarget,
        name: &str,
        handler: impl FnMut(Event) + 'static,
    ) -> SlideResult<()> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn mouse_position(event: &Event) -> Option<Vec2> {
        let event = event.dyn_ref::<MouseEvent>()?;
        Some(Vec2::new(event.client_x() as f32, event.client_y() as f32))
    }

    /// First touch on the viewport
    fn touch_position(event: &Event) -> Option<Vec2> {
        let touch = event.dyn_ref::<TouchEvent>()?.target_touches().get(0)?;
        Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
    }

    fn set_body_overflow(value: Option<&str>) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let style = body.style();
        let result = match value {
            Some(v) => style.set_property("overflow", v),
            None => style.remove_property("overflow").map(|_| ()),
        };
        if let Err(e) = result {
            log::warn!("failed to set body overflow: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> momentum_slide::SlideResult<()> {
    use glam::Vec2;
    use momentum_slide::platform::headless::{FixedLayout, ManualFrames, RecordedTransforms};
    use momentum_slide::{Axis, Slide, SlideOptions};

    env_logger::init();
    log::info!("Momentum Slide (native) starting...");
    log::info!("Native mode runs a headless flick - build for wasm32 to use it in a page");

    let layout = FixedLayout::with_travel(Axis::Vertical, 600.0, 2400.0);
    let mut slide = Slide::new(
        SlideOptions::vertical().with_friction(0.95),
        ManualFrames::new(),
        RecordedTransforms::new(),
        layout,
    )?;

    // A quick upward flick: pointer travels 120px over ~50ms
    let start = 500.0;
    slide.on_pointer_down(Vec2::new(0.0, start), 0.0);
    for (i, y) in [470.0, 440.0, 410.0, 380.0].into_iter().enumerate() {
        slide.on_pointer_move(Vec2::new(0.0, y), (i as f64 + 1.0) * 12.0);
    }
    slide.on_pointer_up();

    let mut frames = 0usize;
    while slide.engine().has_outstanding_frame() {
        slide.on_frame();
        frames += 1;
        if frames % 10 == 0 || !slide.engine().is_running() {
            println!("{}", serde_json::to_string(&slide.snapshot())?);
        }
    }

    log::info!(
        "At rest after {} frames at offset {} ({} renders, {} frame requests)",
        frames,
        slide.position().y(),
        slide.sink().count(),
        slide.engine().frames().requested()
    );
    Ok(())
}

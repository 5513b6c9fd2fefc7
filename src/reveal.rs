use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use portfolio_core::reveal::{
    progress_width, stagger_delay_ms, COUNTER_THRESHOLD, FADE_HIDDEN_OPACITY,
    FADE_HIDDEN_TRANSFORM, FADE_SHOWN_OPACITY, FADE_SHOWN_TRANSFORM, FADE_THRESHOLD,
    FADE_TRANSITION, SKILL_BAR_THRESHOLD,
};
use portfolio_core::{parse_count, CounterAnimation};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;
use crate::observer::VisibilityObserver;

const COUNTED_CLASS: &str = "counted";
const COUNTER_SELECTOR: &str = ".counter";
const COUNT_ATTR: &str = "data-count";
const PROGRESS_ATTR: &str = "data-progress";

#[derive(Clone, Copy, Debug)]
pub(crate) struct CounterTimings {
    pub(crate) duration_ms: u32,
    pub(crate) frame_ms: u32,
}

pub(crate) fn observe_counters(
    cards: &[Element],
    timings: CounterTimings,
) -> Result<VisibilityObserver, JsValue> {
    let observer = VisibilityObserver::new(COUNTER_THRESHOLD, move |entries, _observer| {
        for entry in entries {
            if entry.is_intersecting() {
                start_counter(&entry.target(), timings);
            }
        }
    })?;
    observer.observe_all(cards);
    Ok(observer)
}

/// Starts the count-up for a stat card once. Returns `false` if the card was
/// already counted.
pub(crate) fn start_counter(card: &Element, timings: CounterTimings) -> bool {
    if dom::has_class(card, COUNTED_CLASS) {
        return false;
    }
    dom::add_class(card, COUNTED_CLASS);
    let Some(counter) = dom::query(card, COUNTER_SELECTOR) else {
        return true;
    };
    let Some(target) = counter.get_attribute(COUNT_ATTR).as_deref().and_then(parse_count) else {
        return true;
    };
    let animation = CounterAnimation::new(target, timings.duration_ms, timings.frame_ms);
    counter_frame(
        counter,
        Rc::new(RefCell::new(animation)),
        Rc::new(RefCell::new(None)),
    );
    true
}

fn counter_frame(
    counter: Element,
    animation: Rc<RefCell<CounterAnimation>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
) {
    frame.borrow_mut().take();
    let next = animation.borrow_mut().step();
    counter.set_text_content(Some(next.text()));
    if next.is_finished() {
        return;
    }
    let slot = Rc::clone(&frame);
    let handle = request_animation_frame(move |_timestamp| {
        counter_frame(counter, animation, slot);
    });
    *frame.borrow_mut() = Some(handle);
}

pub(crate) fn observe_skill_bars(bars: &[Element]) -> Result<VisibilityObserver, JsValue> {
    let observer = VisibilityObserver::new(SKILL_BAR_THRESHOLD, |entries, observer| {
        for entry in entries {
            if entry.is_intersecting() {
                let bar = entry.target();
                fill_skill_bar(&bar);
                observer.unobserve(&bar);
            }
        }
    })?;
    observer.observe_all(bars);
    Ok(observer)
}

pub(crate) fn fill_skill_bar(bar: &Element) {
    if let Some(progress) = bar.get_attribute(PROGRESS_ATTR) {
        dom::set_style(bar, "width", &progress_width(&progress));
    }
}

pub(crate) fn observe_fade_ins(
    blocks: &[Element],
    stagger_ms: u32,
) -> Result<VisibilityObserver, JsValue> {
    for block in blocks {
        prepare_fade(block);
    }
    let observer = VisibilityObserver::new(FADE_THRESHOLD, move |entries, observer| {
        for (index, entry) in entries.into_iter().enumerate() {
            if !entry.is_intersecting() {
                continue;
            }
            let block = entry.target();
            observer.unobserve(&block);
            schedule_fade_in(block, stagger_delay_ms(index, stagger_ms));
        }
    })?;
    observer.observe_all(blocks);
    Ok(observer)
}

pub(crate) fn prepare_fade(block: &Element) {
    dom::set_style(block, "opacity", FADE_HIDDEN_OPACITY);
    dom::set_style(block, "transform", FADE_HIDDEN_TRANSFORM);
    dom::set_style(block, "transition", FADE_TRANSITION);
}

pub(crate) fn schedule_fade_in(block: Element, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        dom::set_style(&block, "opacity", FADE_SHOWN_OPACITY);
        dom::set_style(&block, "transform", FADE_SHOWN_TRANSFORM);
    })
    .forget();
}

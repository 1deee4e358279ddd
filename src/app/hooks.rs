use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_debounce_fn, use_event_listener, use_intersection_observer_with_options,
    use_interval_fn_with_options, use_window, utils::Pausable, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn, UseIntervalFnOptions,
};
use web_sys::{IntersectionObserverEntry, ScrollBehavior, ScrollIntoViewOptions};

use crate::{
    content::Behavior,
    reveal::RevealLatch,
    scroll_spy::{back_to_top_visible, ScrollSpy},
    section::SectionId,
    spotlight::Pointer,
    typewriter::Typewriter,
};

/// Page-wide navigation state, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct PageState {
    spy: RwSignal<ScrollSpy>,
    nav_requests: RwSignal<u64>,
    pub active: Memo<SectionId>,
    pub menu_open: RwSignal<bool>,
    pub show_back_to_top: Memo<bool>,
}

impl PageState {
    /// Make `id` active, smooth-scroll to it and close the mobile menu.
    pub fn go_to(&self, id: SectionId) {
        let el = if let Some(el) = document().get_element_by_id(id.as_str()) {
            el
        } else {
            log::warn!("No element for section {id}");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);

        self.spy.update(|s| s.navigate(id));
        self.menu_open.set(false);
        self.nav_requests.update(|n| *n += 1);
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }
}

fn section_top(id: SectionId) -> Option<f64> {
    document()
        .get_element_by_id(id.as_str())
        .map(|el| el.get_bounding_client_rect().top())
}

/// Scroll-spy, back-to-top and manual navigation for the page.
pub fn use_page_state(behavior: Behavior) -> PageState {
    let spy = RwSignal::new(ScrollSpy::new(behavior.spy_window_px));
    let nav_requests = RwSignal::new(0_u64);
    let menu_open = RwSignal::new(false);
    let (scroll_y, set_scroll_y) = signal(0.0_f64);

    // a manual navigation ends once no scroll event arrived for `settle_ms`
    let settle = use_debounce_fn(
        move || {
            log::debug!("Scroll settled");
            spy.update(ScrollSpy::settle);
        },
        behavior.settle_ms,
    );

    let settle_on_scroll = settle.clone();
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        set_scroll_y.set(window().scroll_y().unwrap_or_default());
        spy.update(|s| {
            s.on_scroll(section_top);
        });
        if spy.with_untracked(ScrollSpy::is_navigating) {
            settle_on_scroll();
        }
    });

    // arm the settle timer even when the target is already in place and no
    // scroll event follows
    Effect::watch(
        move || nav_requests.get(),
        move |_, _, _| {
            settle();
        },
        false,
    );

    let back_to_top_px = behavior.back_to_top_px;
    PageState {
        spy,
        nav_requests,
        active: Memo::new(move |_| spy.with(ScrollSpy::active)),
        menu_open,
        show_back_to_top: Memo::new(move |_| back_to_top_visible(scroll_y.get(), back_to_top_px)),
    }
}

/// `true` from the first time `target` intersects the viewport at `threshold`.
pub fn use_reveal(target: NodeRef<html::Div>, threshold: f64) -> Signal<bool> {
    let latch = RwSignal::new(RevealLatch::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries: Vec<IntersectionObserverEntry>, _| {
            let mut next = latch.get_untracked();
            if next.observe(entries.iter().any(|e| e.is_intersecting())) {
                latch.set(next);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move |_| {
        if latch.with(RevealLatch::is_revealed) {
            stop();
        }
    });

    Signal::derive(move || latch.with(RevealLatch::is_revealed))
}

/// The prefix of `text` revealed so far, one character every `speed_ms`.
pub fn use_typewriter(text: Signal<String>, speed_ms: Signal<u64>) -> Signal<String> {
    let writer = RwSignal::new(Typewriter::new(text.get_untracked()));

    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || {
            writer.update(|w| {
                w.tick();
            })
        },
        speed_ms,
        UseIntervalFnOptions::default().immediate(false),
    );

    let restart_pause = pause.clone();
    Effect::watch(
        move || (text.get(), speed_ms.get()),
        move |(text, _), _, _| {
            restart_pause();
            writer.update(|w| w.restart(text.as_str()));
            resume();
        },
        true,
    );

    Effect::new(move |_| {
        if writer.with(Typewriter::is_finished) {
            pause();
        }
    });

    Signal::derive(move || writer.with(|w| w.displayed().to_string()))
}

/// Last pointer position, updated on every move.
pub fn use_pointer() -> ReadSignal<Pointer> {
    let (pointer, set_pointer) = signal(Pointer::default());
    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        set_pointer.set(Pointer::new(ev.client_x().into(), ev.client_y().into()));
    });
    pointer
}

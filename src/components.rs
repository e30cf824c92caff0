//! Yew view components for the launch screen.
//!
//! The fill and the button are stateless and render from props. The pager
//! view keeps only the in-progress drag; the page index itself belongs to
//! the screen.

use launch_pager::config::{BUTTON_TRANSITION_MS, FILL_TRANSITION_MS};
use launch_pager::launch::progress_percent;
use launch_pager::{PagerState, SwipeTracker};
use log::debug;
use web_sys::Element;
use yew::prelude::*;

/// Accent fill rising from the bottom of the screen.
#[derive(Properties, PartialEq)]
pub struct ProgressFillProps {
    pub progress: f32,
}

#[function_component(ProgressFill)]
pub fn progress_fill(props: &ProgressFillProps) -> Html {
    let style = format!(
        "height: {:.1}%; transition: height {}ms ease-out;",
        progress_percent(props.progress),
        FILL_TRANSITION_MS
    );
    html! {
        <div class="progress-fill" {style} />
    }
}

/// Round launch control, collapsed while a sequence runs.
#[derive(Properties, PartialEq)]
pub struct LaunchButtonProps {
    pub visible: bool,
    pub onlaunch: Callback<()>,
}

#[function_component(LaunchButton)]
pub fn launch_button(props: &LaunchButtonProps) -> Html {
    let onclick = props.onlaunch.reform(|_: MouseEvent| ());
    let slot_class = classes!(
        "launch-slot",
        if props.visible { "shown" } else { "collapsed" }
    );
    let style = format!(
        "transition: transform {0}ms ease-in-out, opacity {0}ms ease-in-out;",
        BUTTON_TRANSITION_MS
    );

    html! {
        <div class={slot_class} {style}>
            <button class="launch-button"
                aria-label="Launch"
                disabled={!props.visible}
                {onclick}>
                <svg class="launch-glyph" viewBox="0 0 24 24" aria-hidden="true">
                    <path d="M12 2c3 2.5 4.5 6 4.5 10l2.5 3v3l-4-1.5h-6L5 18v-3l2.5-3C7.5 8 9 4.5 12 2z" />
                    <circle cx="12" cy="10" r="2" />
                </svg>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageNumeralProps {
    pub label: AttrValue,
}

#[function_component(PageNumeral)]
pub fn page_numeral(props: &PageNumeralProps) -> Html {
    html! {
        <div class="page">
            <span class="page-numeral">{ props.label.clone() }</span>
        </div>
    }
}

/// Horizontally swipeable view showing the current page's numeral.
///
/// Emits the resolved page delta of each finished swipe through `on_swipe`.
#[derive(Properties, PartialEq)]
pub struct PagerViewProps {
    pub state: PagerState,
    pub on_swipe: Callback<isize>,
}

#[function_component(PagerView)]
pub fn pager_view(props: &PagerViewProps) -> Html {
    let node = use_node_ref();
    let tracker = use_mut_ref(SwipeTracker::default);
    let drag_offset = use_state(|| 0.0_f64);

    let onpointerdown = {
        let node = node.clone();
        let tracker = tracker.clone();
        Callback::from(move |e: PointerEvent| {
            let started = e.is_primary()
                && tracker
                    .borrow_mut()
                    .begin(e.pointer_id(), f64::from(e.client_x()), e.time_stamp());
            if !started {
                return;
            }
            if let Some(el) = node.cast::<Element>() {
                if let Err(err) = el.set_pointer_capture(e.pointer_id()) {
                    debug!("pointer capture unavailable: {:?}", err);
                }
            }
        })
    };

    let onpointermove = {
        let tracker = tracker.clone();
        let drag_offset = drag_offset.clone();
        let state = props.state;
        Callback::from(move |e: PointerEvent| {
            let offset = tracker
                .borrow()
                .update(e.pointer_id(), f64::from(e.client_x()));
            if let Some(dx) = offset {
                drag_offset.set(state.resist(dx));
            }
        })
    };

    let onpointerup = {
        let node = node.clone();
        let tracker = tracker.clone();
        let drag_offset = drag_offset.clone();
        let on_swipe = props.on_swipe.clone();
        Callback::from(move |e: PointerEvent| {
            let page_width = node
                .cast::<Element>()
                .map(|el| f64::from(el.client_width()))
                .unwrap_or_default();
            let mut tracker = tracker.borrow_mut();
            let was_active = tracker.is_active();
            let delta = tracker.end(
                e.pointer_id(),
                f64::from(e.client_x()),
                e.time_stamp(),
                page_width,
            );
            let released = was_active && !tracker.is_active();
            drop(tracker);
            if released {
                drag_offset.set(0.0);
            }
            if delta != 0 {
                on_swipe.emit(delta);
            }
        })
    };

    let onpointercancel = {
        let tracker = tracker.clone();
        let drag_offset = drag_offset.clone();
        Callback::from(move |e: PointerEvent| {
            let cancelled = tracker.borrow_mut().cancel(e.pointer_id());
            if cancelled {
                drag_offset.set(0.0);
            }
        })
    };

    let transition = if tracker.borrow().is_active() {
        "none"
    } else {
        "transform 200ms ease-out"
    };
    let track_style = format!(
        "transform: translateX({:.1}px); transition: {};",
        *drag_offset, transition
    );

    html! {
        <div class="pager"
            ref={node}
            {onpointerdown}
            {onpointermove}
            {onpointerup}
            {onpointercancel}>
            <div class="pager-track" style={track_style}>
                <PageNumeral label={AttrValue::from(props.state.label())} />
            </div>
            <div class="pager-indicator">
                { format!("{} / {}", props.state.current_page(), props.state.max_page()) }
            </div>
        </div>
    }
}

//! Entry point for the launch pager screen.
//! Wires the launch hook and pager state into the view components.

use launch_pager::config::{LOG_LEVEL, MAX_PAGE};
use launch_pager::PagerState;
use log::info;
use yew::prelude::*;

mod components;
mod hooks;

use components::{LaunchButton, PagerView, ProgressFill};
use hooks::use_launch_sequence;

/// The single screen: progress fill behind a numbered pager, launch button
/// docked at the bottom.
#[function_component(App)]
fn app() -> Html {
    let launch = use_launch_sequence();
    let pager = use_state(|| PagerState::new(MAX_PAGE));

    let on_swipe = {
        let pager = pager.clone();
        Callback::from(move |delta: isize| {
            let mut next = *pager;
            let previous = next.current_page();
            let page = next.offset_by(delta);
            if page != previous {
                info!("page {} -> {}", previous, page);
                pager.set(next);
            }
        })
    };

    html! {
        <main class="screen">
            <ProgressFill progress={launch.state.progress} />
            <PagerView state={*pager} {on_swipe} />
            <LaunchButton visible={!launch.state.started} onlaunch={launch.launch.clone()} />
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    info!("starting launch pager with pages 0..={}", MAX_PAGE);
    yew::Renderer::<App>::new().render();
}

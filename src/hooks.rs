use futures::future::Abortable;
use gloo_timers::future::TimeoutFuture;
use launch_pager::{run_launch_sequence, AppState, LaunchTask};
use log::{debug, info};
use yew::prelude::*;

/// Launch state plus the callback that starts a sequence.
#[derive(Clone)]
pub struct LaunchHandle {
    /// Latest frame applied to the screen.
    pub state: AppState,
    /// Starts the sequence; ignored while one is already running.
    pub launch: Callback<()>,
}

/// Owns the launch task for the calling component.
///
/// The task lives only as long as the component: unmounting aborts it, so
/// no frame is applied to a torn-down screen.
#[hook]
pub fn use_launch_sequence() -> LaunchHandle {
    let state = use_state(AppState::default);
    let task = use_mut_ref(LaunchTask::default);

    {
        let task = task.clone();
        use_effect_with((), move |_| {
            move || {
                if task.borrow_mut().cancel() {
                    debug!("launch sequence cancelled on teardown");
                }
            }
        });
    }

    let launch = {
        let state = state.clone();
        let task = task.clone();
        Callback::from(move |_: ()| {
            let Some(registration) = task.borrow_mut().try_start() else {
                debug!("launch ignored, sequence already running");
                return;
            };
            info!("launch sequence started");

            let state = state.clone();
            let task = task.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let sequence = run_launch_sequence(
                    move |frame| state.set(AppState::from(frame)),
                    TimeoutFuture::new,
                );
                if Abortable::new(sequence, registration).await.is_ok() {
                    task.borrow_mut().finish();
                    info!("launch sequence finished");
                }
            });
        })
    };

    LaunchHandle {
        state: *state,
        launch,
    }
}

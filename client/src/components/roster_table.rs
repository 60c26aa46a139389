//! Live table of logged-in students.
//!
//! SYSTEM CONTEXT
//! ==============
//! Polls `/active_students` every `ROSTER_POLL_INTERVAL` while mounted and
//! rebuilds the table body from each accepted snapshot. Ticks that land while
//! a request is still outstanding are skipped, up to the gate's stale limit.

use leptos::prelude::*;

use crate::state::students::RosterState;

const COLUMNS: [&str; 4] = ["Student ID", "Username", "Status", "Active Time"];

#[component]
pub fn RosterTable() -> impl IntoView {
    let roster = RwSignal::new(RosterState::default());

    #[cfg(feature = "hydrate")]
    start_polling(roster);

    view! {
        <table class="roster-table">
            <thead>
                <tr>
                    {COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody id="student-list">
                {move || {
                    roster
                        .get()
                        .table_rows()
                        .into_iter()
                        .map(|cells| {
                            view! {
                                <tr>
                                    {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
        <Show when=move || roster.get().loaded && roster.get().rows.is_empty()>
            <p class="roster-table__empty">"No students logged in."</p>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn start_polling(roster: RwSignal<RosterState>) {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use crate::state::students::ROSTER_POLL_INTERVAL;

    let alive = Arc::new(AtomicBool::new(true));
    let alive_task = alive.clone();
    leptos::task::spawn_local(async move {
        loop {
            if !alive_task.load(Ordering::Relaxed) {
                break;
            }
            if let Some(ticket) = roster.try_update(RosterState::begin_poll).flatten() {
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::fetch_active_students().await;
                    if let Err(e) = &result {
                        log::warn!("roster poll failed: {e}");
                    }
                    roster.try_update(|s| s.apply_snapshot(ticket, result));
                });
            }
            gloo_timers::future::sleep(ROSTER_POLL_INTERVAL).await;
        }
    });
    on_cleanup(move || {
        alive.store(false, Ordering::Relaxed);
        roster.try_update(RosterState::stop_polling);
    });
}

use super::face::CardFace;
use super::timers::Timers;
use super::window;
use crate::RULES;
use crate::TITLE;
use crate::solver::Solver;
use crate::table::Table;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_meta::provide_meta_context;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! { <Game24 /> }
}

/// The card table. Owns its [`Table`] state; nothing here outlives the view.
#[component]
pub fn Game24() -> impl IntoView {
    let table = RwSignal::new(Table::default());
    let timers = Timers::new(table);
    let solver = Solver::default();
    let animating = Signal::derive(move || table.with(Table::animating));
    let hand = Memo::new(move |_| table.with(|t| t.hand().copied()));

    let solve = move || match hand.with(|hand| hand.as_ref().map(|hand| solver.url(hand))) {
        Some(url) => match window::open(&url) {
            Ok(()) => log::debug!("{:<32}{}", "opened solver", url),
            Err(e) => log::warn!("{:<32}{}", "could not open solver", e),
        },
        None => log::debug!("{:<32}", "no hand to solve"),
    };

    Effect::new(move |_| {
        log::info!("{:<32}", "mounting table");
        timers.trigger();
    });
    on_cleanup(move || timers.teardown());

    view! {
        <Title text=TITLE />
        <div class="min-h-screen bg-gray-100 p-8">
            <div class="max-w-2xl mx-auto">
                <h1 class="text-3xl font-bold text-center mb-4">{TITLE}</h1>
                <div class="bg-blue-500 border-l-4 border-blue-800 text-white p-4 mb-6">
                    <p>{RULES}</p>
                </div>
                <div class="grid grid-cols-2 gap-4 mb-8">
                    {move || {
                        hand.get()
                            .map(|hand| {
                                hand.iter()
                                    .map(|&card| view! { <CardFace card=card animating=animating /> })
                                    .collect_view()
                            })
                    }}
                </div>
                <div class="flex justify-center gap-4">
                    <button
                        on:click=move |_| timers.trigger()
                        disabled=move || animating.get()
                        class="px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600 disabled:opacity-50"
                    >
                        "New Cards"
                    </button>
                    <button
                        on:click=move |_| solve()
                        class="px-4 py-2 bg-green-500 text-white rounded hover:bg-green-600 flex items-center gap-2"
                    >
                        "Show Solutions ↗"
                    </button>
                </div>
            </div>
        </div>
    }
}

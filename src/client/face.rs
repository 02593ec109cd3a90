use crate::cards::Card;
use leptos::prelude::*;

const SHOWN: &str = "transition-all duration-500 transform rotate-y-0 scale-100 opacity-100";
const HIDDEN: &str = "transition-all duration-500 transform rotate-y-180 scale-50 opacity-0";

/// One card: rank over suit, red for hearts and diamonds.
/// Flips away while the table is animating.
#[component]
pub fn CardFace(card: Card, #[prop(into)] animating: Signal<bool>) -> impl IntoView {
    let ink = if card.suit().is_red() {
        "text-red-500"
    } else {
        "text-black"
    };
    let motion = move || if animating.get() { HIDDEN } else { SHOWN };
    view! {
        <div class=motion data-card=card.to_string()>
            <div class="w-32 h-48 flex flex-col items-center justify-center text-4xl border-2 rounded-xl bg-white shadow-md">
                <div class=ink>
                    <div class="text-2xl mb-2">{card.rank().to_string()}</div>
                    <div class="text-4xl">{card.suit().to_string()}</div>
                </div>
            </div>
        </div>
    }
}

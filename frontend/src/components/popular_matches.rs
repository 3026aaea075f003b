use crate::api;
use crate::Route;
use log::warn;
use shared::{format_schedule_date, GamePickDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Trending picks strip under the chat. Best-effort: the whole section
/// disappears when the fetch fails or comes back empty.
#[function_component(PopularMatches)]
pub fn popular_matches() -> Html {
    let picks = use_state(|| None::<Vec<GamePickDto>>);

    {
        let picks = picks.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::chat::get_popular_games().await {
                    Ok(fetched) => picks.set(Some(fetched)),
                    Err(e) => {
                        warn!("Popular games unavailable: {}", e);
                    }
                }
            });
        });
    }

    let games = match &*picks {
        Some(games) if !games.is_empty() => games.clone(),
        _ => return html! {},
    };

    html! {
        <div class="mt-6">
            <h3 class="text-lg font-bold text-gray-900 mb-4 flex items-center gap-2">
                <span class="text-2xl">{"🔥"}</span>
                {"Popular Matches"}
            </h3>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                {for games.iter().map(popular_card)}
            </div>
        </div>
    }
}

fn popular_card(pick: &GamePickDto) -> Html {
    html! {
        <Link<Route>
            to={Route::GameDetails { game_id: pick.game_id.clone() }}
            classes={classes!("block", "h-full")}
        >
            <div class="h-full bg-white border border-gray-200 rounded-lg p-4 hover:border-blue-400 hover:shadow-lg transition-all duration-200 cursor-pointer">
                <span class="inline-flex items-center px-3 py-1 rounded-full text-xs font-bold uppercase bg-blue-100 text-blue-800 mb-3">
                    {&pick.sport}
                </span>

                <div class="mb-3">
                    <p class="text-gray-900 font-semibold text-sm mb-1">{&pick.team_a}</p>
                    <p class="text-gray-400 text-xs mb-1">{"vs"}</p>
                    <p class="text-gray-900 font-semibold text-sm">{&pick.team_b}</p>
                </div>

                <p class="text-gray-500 text-xs mb-3">
                    {"📅 "}{format_schedule_date(&pick.scheduled_date)}
                </p>

                <div class="pt-3 border-t border-gray-200">
                    <div class="flex justify-between items-center">
                        <span class="text-gray-500 text-xs">{"Confidence"}</span>
                        <span class="text-blue-600 font-bold text-lg">{pick.confidence_display()}</span>
                    </div>
                    <div class="mt-2 h-1.5 bg-gray-200 rounded-full overflow-hidden">
                        <div
                            class="h-full bg-gradient-to-r from-blue-500 to-indigo-600 rounded-full transition-all duration-500"
                            style={format!("width: {}%", pick.confidence)}
                        ></div>
                    </div>
                    <p class="text-gray-700 text-xs mt-2 truncate">{"⚡ "}{&pick.predicted_outcome}</p>
                </div>
            </div>
        </Link<Route>>
    }
}

use log::error;
use shared::GameDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::feedback::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::components::game_card::GameCard;
use crate::remote::{use_remote, RemoteState, UseRemoteHandle};

fn load_games(games: &UseRemoteHandle<Vec<GameDto>>) {
    let games = games.clone();
    let ticket = games.begin();
    spawn_local(async move {
        let outcome = api::games::get_games().await.map_err(|e| e.to_string());
        if let Err(e) = &outcome {
            error!("Failed to load games: {}", e);
        }
        games.settle(ticket, outcome);
    });
}

#[function_component(Home)]
pub fn home() -> Html {
    let games = use_remote::<Vec<GameDto>>();

    {
        let games = games.clone();
        use_effect_with((), move |_| {
            load_games(&games);
        });
    }

    let on_retry = {
        let games = games.clone();
        Callback::from(move |_: MouseEvent| load_games(&games))
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            // Hero Section
            <div class="bg-gradient-to-r from-slate-800 to-blue-600 text-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 text-center">
                    <h1 class="text-3xl sm:text-4xl lg:text-5xl font-bold mb-4">
                        {"⚡ AI-Powered Sports Predictions"}
                    </h1>
                    <p class="text-lg text-blue-100 max-w-2xl mx-auto">
                        {"Pick a game below to see the predicted winner, the confidence behind it, and the factors that drove the call."}
                    </p>
                </div>
            </div>

            <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <div class="mb-8">
                    <h2 class="text-2xl font-bold text-gray-900">{"🏀 Upcoming Games"}</h2>
                    <p class="mt-2 text-gray-600">{"Click on any game to view the full prediction"}</p>
                </div>

                {match games.state() {
                    RemoteState::Idle | RemoteState::Loading => html! {
                        <LoadingPanel message="Loading games..." />
                    },
                    RemoteState::Failed(_) => html! {
                        <ErrorPanel
                            title="Error Loading Games"
                            message="Failed to load games. Make sure the backend is running."
                            on_retry={on_retry.clone()}
                        />
                    },
                    RemoteState::Ready(list) if list.is_empty() => html! {
                        <EmptyPanel
                            title="No Games Scheduled"
                            message="Check back soon for upcoming matchups."
                        />
                    },
                    RemoteState::Ready(list) => html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {for list.iter().map(|game| html! {
                                <GameCard key={game.game_id.clone()} game={game.clone()} />
                            })}
                        </div>
                    },
                }}
            </div>
        </div>
    }
}

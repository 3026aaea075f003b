use log::error;
use shared::GameDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::feedback::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::components::game_card::GameCard;
use crate::remote::{use_remote, RemoteState, UseRemoteHandle};
use crate::Route;

const SPORT_TABS: [(&str, Option<&str>); 7] = [
    ("All Sports", None),
    ("NBA", Some("NBA")),
    ("NFL", Some("NFL")),
    ("NHL", Some("NHL")),
    ("MLB", Some("MLB")),
    ("NCAAF", Some("NCAAF")),
    ("NCAAB", Some("NCAAB")),
];

fn load_games(games: &UseRemoteHandle<Vec<GameDto>>, sport: Option<&'static str>) {
    let games = games.clone();
    let ticket = games.begin();
    spawn_local(async move {
        let outcome = match sport {
            Some(sport) => api::games::get_games_by_sport(sport).await,
            None => api::games::get_games().await,
        }
        .map_err(|e| e.to_string());
        if let Err(e) = &outcome {
            error!("Failed to load past games: {}", e);
        }
        games.settle(ticket, outcome);
    });
}

#[function_component(History)]
pub fn history() -> Html {
    let selected = use_state(|| 0usize);
    let games = use_remote::<Vec<GameDto>>();

    // Tab changes refetch; rapid switching settles on the newest tab.
    {
        let games = games.clone();
        use_effect_with(*selected, move |index| {
            load_games(&games, SPORT_TABS[*index].1);
        });
    }

    let on_retry = {
        let games = games.clone();
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| load_games(&games, SPORT_TABS[*selected].1))
    };

    let tabs = SPORT_TABS
        .iter()
        .enumerate()
        .map(|(index, (label, _))| {
            let selected = selected.clone();
            let active = *selected == index;
            let class = if active {
                "px-4 py-2 rounded-full text-sm font-medium bg-blue-600 text-white"
            } else {
                "px-4 py-2 rounded-full text-sm font-medium bg-white text-gray-700 border border-gray-300 hover:bg-gray-100"
            };
            html! {
                <button
                    key={*label}
                    {class}
                    onclick={Callback::from(move |_| selected.set(index))}
                >
                    {*label}
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold text-gray-900">{"📜 Past Games"}</h1>
                    <p class="mt-2 text-gray-600">{"Completed games and how the predictions fared"}</p>
                </div>

                <div class="flex flex-wrap gap-2 mb-6">
                    {tabs}
                </div>

                {match games.state() {
                    RemoteState::Idle | RemoteState::Loading => html! {
                        <LoadingPanel message="Loading past games..." />
                    },
                    RemoteState::Failed(_) => html! {
                        <ErrorPanel
                            title="Error Loading Games"
                            message="Failed to load games. Make sure the backend is running."
                            on_retry={on_retry.clone()}
                        />
                    },
                    RemoteState::Ready(list) => completed_section(list, SPORT_TABS[*selected].0),
                }}
            </div>
        </div>
    }
}

fn completed_section(list: &[GameDto], tab_label: &str) -> Html {
    let completed: Vec<&GameDto> = list.iter().filter(|game| game.is_completed()).collect();
    if completed.is_empty() {
        return html! {
            <EmptyPanel
                title="No Completed Games"
                message={format!("Nothing under {} has finished yet.", tab_label)}
            >
                <Link<Route> to={Route::Home} classes="text-blue-600 hover:text-blue-800 font-medium">
                    {"Browse upcoming games →"}
                </Link<Route>>
            </EmptyPanel>
        };
    }
    html! {
        <>
            <p class="text-sm text-gray-600 mb-4">
                {format!(
                    "Showing {} completed game{}",
                    completed.len(),
                    if completed.len() == 1 { "" } else { "s" }
                )}
            </p>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {for completed.iter().map(|game| html! {
                    <GameCard key={game.game_id.clone()} game={(*game).clone()} />
                })}
            </div>
        </>
    }
}

use log::error;
use shared::{GameDto, PredictionDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::confidence_meter::ConfidenceMeter;
use crate::components::factor_breakdown::FactorBreakdown;
use crate::components::feedback::{ErrorPanel, LoadingPanel};
use crate::components::reason_item::ReasonItem;
use crate::components::result_form::ResultForm;
use crate::components::verification_badge::VerificationBadge;
use crate::remote::{use_remote, RemoteState, UseRemoteHandle};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct GameDetailsProps {
    pub game_id: String,
}

/// There is no single-game endpoint; the game comes from the list,
/// selected by id client-side.
fn load_game(resource: &UseRemoteHandle<GameDto>, game_id: String) {
    let resource = resource.clone();
    let ticket = resource.begin();
    spawn_local(async move {
        let outcome = match api::games::get_games().await {
            Ok(games) => games
                .into_iter()
                .find(|game| game.game_id == game_id)
                .ok_or_else(|| format!("Game {} was not found", game_id)),
            Err(e) => Err(e.to_string()),
        };
        if let Err(e) = &outcome {
            error!("Failed to load game: {}", e);
        }
        resource.settle(ticket, outcome);
    });
}

fn load_prediction(resource: &UseRemoteHandle<PredictionDto>, game_id: String) {
    let resource = resource.clone();
    let ticket = resource.begin();
    spawn_local(async move {
        let outcome = api::predictions::get_prediction(&game_id)
            .await
            .map_err(|e| e.to_string());
        if let Err(e) = &outcome {
            error!("Failed to load prediction: {}", e);
        }
        resource.settle(ticket, outcome);
    });
}

#[function_component(GameDetails)]
pub fn game_details(props: &GameDetailsProps) -> Html {
    let game = use_remote::<GameDto>();
    let prediction = use_remote::<PredictionDto>();

    {
        let game = game.clone();
        let prediction = prediction.clone();
        use_effect_with(props.game_id.clone(), move |game_id| {
            load_game(&game, game_id.clone());
            load_prediction(&prediction, game_id.clone());
        });
    }

    // Retry and a logged result both refresh the pair together.
    let reload = {
        let game = game.clone();
        let prediction = prediction.clone();
        let game_id = props.game_id.clone();
        Callback::from(move |_: ()| {
            load_game(&game, game_id.clone());
            load_prediction(&prediction, game_id.clone());
        })
    };

    let on_retry = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.emit(()))
    };

    let loading = game.state().is_loading() || prediction.state().is_loading();
    let error = game
        .state()
        .error()
        .or_else(|| prediction.state().error())
        .map(|e| e.to_string());

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-4xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <div class="mb-6">
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:text-blue-800 font-medium">
                        {"← Back to Games"}
                    </Link<Route>>
                </div>

                if loading {
                    <LoadingPanel message="Loading prediction..." />
                } else if let Some(message) = error {
                    <ErrorPanel
                        title="Error Loading Prediction"
                        message={message}
                        on_retry={on_retry.clone()}
                    />
                } else if let (RemoteState::Ready(game_data), RemoteState::Ready(pred)) =
                    (game.state(), prediction.state())
                {
                    {detail_body(game_data, pred, &reload)}
                } else {
                    <LoadingPanel message="Loading prediction..." />
                }
            </div>
        </div>
    }
}

fn detail_body(game: &GameDto, prediction: &PredictionDto, reload: &Callback<()>) -> Html {
    html! {
        <div class="space-y-6">
            {matchup_card(game, prediction)}
            {prediction_card(prediction)}
            {factor_card(game, prediction)}
            if !game.is_completed() {
                <ResultForm
                    game_id={game.game_id.clone()}
                    team_a={game.team_a.clone()}
                    team_b={game.team_b.clone()}
                    on_logged={reload.clone()}
                />
            }
            {info_box()}
        </div>
    }
}

fn matchup_card(game: &GameDto, prediction: &PredictionDto) -> Html {
    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <div class="flex justify-center mb-6">
                <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-blue-100 text-blue-800 uppercase">
                    {&game.sport}
                </span>
            </div>
            <div class="flex justify-between items-center gap-4 mb-6">
                <div class="flex-1 text-center">
                    <h2 class="text-2xl sm:text-3xl font-bold text-gray-900">{&game.team_a}</h2>
                </div>
                <div class="px-4 text-gray-500 font-medium">{"vs"}</div>
                <div class="flex-1 text-center">
                    <h2 class="text-2xl sm:text-3xl font-bold text-gray-900">{&game.team_b}</h2>
                </div>
            </div>
            <div class="border-t border-gray-200 pt-4">
                <div class="grid md:grid-cols-2 gap-4">
                    <div>
                        <p class="text-xs uppercase tracking-wider text-gray-500 mb-1">{"Scheduled"}</p>
                        <p class="text-gray-900 font-semibold">{game.schedule_display()}</p>
                    </div>
                    if let Some(result) = &game.result {
                        <div>
                            <div class="flex items-center gap-2 mb-1">
                                <p class="text-xs uppercase tracking-wider text-gray-500">{"Final Result"}</p>
                                <VerificationBadge game_id={game.game_id.clone()} />
                            </div>
                            <p class="text-blue-600 font-bold text-lg">{result}</p>
                            {correctness_strip(result, &prediction.predicted_outcome)}
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}

fn correctness_strip(result: &str, predicted: &str) -> Html {
    if result == predicted {
        html! {
            <p class="mt-2 inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800">
                {"✅ Prediction was correct"}
            </p>
        }
    } else {
        html! {
            <p class="mt-2 inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-red-100 text-red-800">
                {"❌ Prediction was incorrect"}
            </p>
        }
    }
}

fn prediction_card(prediction: &PredictionDto) -> Html {
    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <h3 class="text-xl font-bold text-gray-900 mb-6">{"Prediction Analysis"}</h3>
            <div class="grid gap-6 md:grid-cols-2 mb-6">
                <div class="text-center">
                    <p class="text-xs uppercase tracking-wider text-gray-500 mb-3">{"Predicted Winner"}</p>
                    <p class="text-3xl font-bold text-blue-600">{&prediction.predicted_outcome}</p>
                </div>
                <ConfidenceMeter confidence={prediction.confidence} />
            </div>
            if !prediction.reasons.is_empty() {
                <div class="border-t border-gray-200 pt-6">
                    <h4 class="text-lg font-semibold text-gray-900 mb-4">{"Why This Pick?"}</h4>
                    <div class="space-y-3">
                        {for prediction.reasons.iter().enumerate().map(|(index, reason)| html! {
                            <ReasonItem {index} reason={reason.clone()} />
                        })}
                    </div>
                </div>
            }
        </div>
    }
}

fn factor_card(game: &GameDto, prediction: &PredictionDto) -> Html {
    if prediction.factor_contributions.is_empty() {
        return html! {};
    }
    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <h3 class="text-xl font-bold text-gray-900 mb-6">{"Factor Analysis"}</h3>
            <FactorBreakdown
                team_a={game.team_a.clone()}
                team_b={game.team_b.clone()}
                contributions={prediction.factor_contributions.clone()}
            />
        </div>
    }
}

fn info_box() -> Html {
    html! {
        <div class="bg-blue-50 border border-blue-200 rounded-lg p-6">
            <div class="flex gap-4">
                <span class="text-2xl">{"⚡"}</span>
                <div>
                    <p class="text-gray-900 font-semibold mb-2">{"How Our Predictions Work"}</p>
                    <p class="text-gray-600 text-sm leading-relaxed">
                        {"The prediction engine weighs factors like recent form, injuries, offensive and defensive efficiency, and home advantage. Weights adapt as logged results confirm or contradict earlier calls."}
                    </p>
                </div>
            </div>
        </div>
    }
}

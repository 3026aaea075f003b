use crate::api;
use crate::components::feedback::AlertBanner;
use crate::remote::use_remote;
use log::error;
use shared::ResultLogDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultFormProps {
    pub game_id: String,
    pub team_a: String,
    pub team_b: String,
    /// Fired after the backend accepted the result, so the owning page can
    /// refetch and show the completed game.
    pub on_logged: Callback<()>,
}

#[function_component(ResultForm)]
pub fn result_form(props: &ResultFormProps) -> Html {
    let submission = use_remote::<()>();
    let chosen = use_state(|| None::<String>);

    let pending = submission.state().is_loading();

    let pick = |team: &str| {
        let chosen = chosen.clone();
        let team = team.to_string();
        Callback::from(move |_: MouseEvent| chosen.set(Some(team.clone())))
    };

    let on_submit = {
        let submission = submission.clone();
        let chosen = chosen.clone();
        let game_id = props.game_id.clone();
        let on_logged = props.on_logged.clone();
        Callback::from(move |_: MouseEvent| {
            let actual_outcome = match (*chosen).clone() {
                Some(team) => team,
                None => return,
            };
            if submission.state().is_loading() {
                return;
            }
            let entry = ResultLogDto {
                game_id: game_id.clone(),
                actual_outcome,
            };
            let submission = submission.clone();
            let on_logged = on_logged.clone();
            let ticket = submission.begin();
            spawn_local(async move {
                let outcome = api::predictions::log_result(&entry)
                    .await
                    .map_err(|e| e.to_string());
                if let Err(e) = &outcome {
                    error!("Failed to log result: {}", e);
                }
                let accepted = outcome.is_ok();
                submission.settle(ticket, outcome);
                if accepted {
                    on_logged.emit(());
                }
            });
        })
    };

    let dismiss = {
        let submission = submission.clone();
        Callback::from(move |_: MouseEvent| submission.reset())
    };

    let option_classes = |team: &str| {
        if chosen.as_deref() == Some(team) {
            classes!(
                "flex-1", "px-4", "py-3", "rounded-md", "text-sm", "font-medium",
                "bg-blue-600", "text-white", "shadow"
            )
        } else {
            classes!(
                "flex-1", "px-4", "py-3", "rounded-md", "text-sm", "font-medium",
                "bg-white", "text-gray-700", "border", "border-gray-300", "hover:border-blue-400"
            )
        }
    };

    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <h3 class="text-lg font-medium text-gray-900 mb-1">{"Log Final Result"}</h3>
            <p class="text-sm text-gray-500 mb-4">
                {"Record the winner so the prediction can be verified."}
            </p>

            if let Some(message) = submission.state().error() {
                <AlertBanner
                    message={format!("Could not log the result: {}", message)}
                    on_dismiss={dismiss}
                />
            }

            <div class="flex flex-col sm:flex-row gap-2 mb-4">
                <button onclick={pick(&props.team_a)} disabled={pending} class={option_classes(&props.team_a)}>
                    {&props.team_a}
                </button>
                <button onclick={pick(&props.team_b)} disabled={pending} class={option_classes(&props.team_b)}>
                    {&props.team_b}
                </button>
            </div>

            <button
                onclick={on_submit}
                disabled={pending || chosen.is_none()}
                class="w-full px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed"
            >
                { if pending { "Saving..." } else { "Log Result" } }
            </button>
        </div>
    }
}

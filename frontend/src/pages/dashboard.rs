use log::error;
use shared::{AnalyticsDto, FactorDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::feedback::{EmptyPanel, ErrorPanel, LoadingPanel};
use crate::remote::{use_remote, RemoteState, UseRemoteHandle};

fn load_analytics(analytics: &UseRemoteHandle<AnalyticsDto>) {
    let analytics = analytics.clone();
    let ticket = analytics.begin();
    spawn_local(async move {
        let outcome = api::insights::get_analytics()
            .await
            .map_err(|e| e.to_string());
        if let Err(e) = &outcome {
            error!("Failed to load analytics: {}", e);
        }
        analytics.settle(ticket, outcome);
    });
}

fn load_factors(factors: &UseRemoteHandle<Vec<FactorDto>>) {
    let factors = factors.clone();
    let ticket = factors.begin();
    spawn_local(async move {
        let outcome = api::insights::get_factors().await.map_err(|e| e.to_string());
        if let Err(e) = &outcome {
            error!("Failed to load factors: {}", e);
        }
        factors.settle(ticket, outcome);
    });
}

/// Accuracy metrics and factor weights are separate resources; one of them
/// failing never blanks the other section.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let analytics = use_remote::<AnalyticsDto>();
    let factors = use_remote::<Vec<FactorDto>>();

    {
        let analytics = analytics.clone();
        let factors = factors.clone();
        use_effect_with((), move |_| {
            load_analytics(&analytics);
            load_factors(&factors);
        });
    }

    let retry_analytics = {
        let analytics = analytics.clone();
        Callback::from(move |_: MouseEvent| load_analytics(&analytics))
    };

    let retry_factors = {
        let factors = factors.clone();
        Callback::from(move |_: MouseEvent| load_factors(&factors))
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold text-gray-900">{"📊 Analytics Dashboard"}</h1>
                    <p class="mt-2 text-gray-600">{"How the model is performing and how its factor weights have adapted"}</p>
                </div>

                <div class="mb-10">
                    <h2 class="text-xl font-semibold text-gray-900 mb-4">{"Model Performance"}</h2>
                    {match analytics.state() {
                        RemoteState::Idle | RemoteState::Loading => html! {
                            <LoadingPanel message="Loading analytics..." />
                        },
                        RemoteState::Failed(_) => html! {
                            <ErrorPanel
                                title="Error Loading Analytics"
                                message="Failed to load analytics. Make sure the backend is running."
                                on_retry={retry_analytics.clone()}
                            />
                        },
                        RemoteState::Ready(data) => analytics_section(data),
                    }}
                </div>

                <div>
                    <h2 class="text-xl font-semibold text-gray-900 mb-4">{"Prediction Factors"}</h2>
                    {match factors.state() {
                        RemoteState::Idle | RemoteState::Loading => html! {
                            <LoadingPanel message="Loading factors..." />
                        },
                        RemoteState::Failed(_) => html! {
                            <ErrorPanel
                                title="Error Loading Factors"
                                message="Failed to load prediction factors. Make sure the backend is running."
                                on_retry={retry_factors.clone()}
                            />
                        },
                        RemoteState::Ready(list) if list.is_empty() => html! {
                            <EmptyPanel
                                title="No Factors Configured"
                                message="The model has not published its factor weights yet."
                            />
                        },
                        RemoteState::Ready(list) => html! {
                            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                                {for list.iter().map(|factor| factor_card(factor))}
                            </div>
                        },
                    }}
                </div>
            </div>
        </div>
    }
}

fn analytics_section(data: &AnalyticsDto) -> Html {
    html! {
        <>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {stat_card("Total Predictions", data.total_predictions.to_string(), "text-gray-900")}
                {stat_card("Correct Predictions", data.correct_predictions.to_string(), "text-green-600")}
                {stat_card("Accuracy Rate", data.accuracy_display(), "text-blue-600")}
                {stat_card("Sample Size", data.sample_size.to_string(), "text-gray-900")}
            </div>
            if data.accuracy == 0.0 {
                <div class="mt-4 p-4 bg-blue-50 border border-blue-200 rounded-md">
                    <p class="text-sm text-blue-800">
                        {data.message.clone().unwrap_or_else(|| {
                            "No completed games logged yet. Accuracy shows up once results come in.".to_string()
                        })}
                    </p>
                </div>
            }
        </>
    }
}

fn stat_card(label: &str, value: String, value_class: &'static str) -> Html {
    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <p class="text-sm font-medium text-gray-500 uppercase tracking-wider mb-2">{label}</p>
            <p class={format!("text-3xl font-bold {}", value_class)}>{value}</p>
        </div>
    }
}

fn factor_card(factor: &FactorDto) -> Html {
    let change = factor.weight_change_percent();
    let change_class = if change > 0.0 {
        "text-green-600"
    } else if change < 0.0 {
        "text-red-600"
    } else {
        "text-gray-500"
    };

    html! {
        <div key={factor.factor_id} class="bg-white shadow rounded-lg p-6">
            <div class="mb-4">
                <h3 class="text-lg font-semibold text-gray-900">{&factor.name}</h3>
                if let Some(description) = &factor.description {
                    <p class="text-sm text-gray-600 mt-1">{description}</p>
                }
            </div>

            <div class="flex items-end justify-between mb-4">
                <div>
                    <p class="text-xs uppercase tracking-wider text-gray-500 mb-1">{"Current Weight"}</p>
                    <p class="text-2xl font-bold text-blue-600">{FactorDto::weight_label(factor.current_weight)}</p>
                </div>
                <div class="text-right">
                    <p class="text-xs uppercase tracking-wider text-gray-500 mb-1">
                        {format!("Base {}", FactorDto::weight_label(factor.base_weight))}
                    </p>
                    <p class={format!("text-sm font-semibold {}", change_class)}>
                        {factor.weight_change_display()}
                    </p>
                </div>
            </div>

            // Allowed-range band with the current weight drawn on top of it.
            <div class="relative h-3 bg-gray-200 rounded-full overflow-hidden">
                <div
                    class="absolute h-full bg-blue-100"
                    style={format!(
                        "left: {:.1}%; width: {:.1}%",
                        factor.range_start_percent(),
                        factor.range_span_percent()
                    )}
                ></div>
                <div
                    class="absolute h-full bg-gradient-to-r from-blue-500 to-blue-600 rounded-full"
                    style={format!("width: {:.1}%", factor.current_bar_percent())}
                ></div>
            </div>
            <div class="flex justify-between mt-1">
                <span class="text-xs text-gray-500">
                    {format!("Min {}", FactorDto::weight_label(factor.min_weight))}
                </span>
                <span class="text-xs text-gray-500">
                    {format!("Max {}", FactorDto::weight_label(factor.max_weight))}
                </span>
            </div>
        </div>
    }
}

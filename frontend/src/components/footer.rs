use crate::api;
use crate::version::Version;
use log::warn;
use shared::HealthDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let health = use_state(|| None::<HealthDto>);

    {
        let health = health.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::health::get_health().await {
                    Ok(info) => health.set(Some(info)),
                    Err(e) => {
                        // The badge simply stays absent.
                        warn!("Backend health unavailable: {}", e);
                    }
                }
            });
        });
    }

    let health_badge = match &*health {
        Some(info) if info.is_healthy() => html! {
            <span class="inline-flex items-center gap-1.5 px-2.5 py-0.5 rounded-full text-xs font-medium bg-green-400/20 text-green-200">
                <span class="w-1.5 h-1.5 rounded-full bg-green-300"></span>
                {format!("{} online", info.service)}
            </span>
        },
        Some(info) => html! {
            <span class="inline-flex items-center gap-1.5 px-2.5 py-0.5 rounded-full text-xs font-medium bg-yellow-400/20 text-yellow-200">
                <span class="w-1.5 h-1.5 rounded-full bg-yellow-300"></span>
                {format!("{}: {}", info.service, info.status)}
            </span>
        },
        None => html! {},
    };

    html! {
        <footer class="bg-gradient-to-r from-slate-800 to-blue-600 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex flex-col sm:flex-row justify-between items-center space-y-4 sm:space-y-0">
                    <div class="text-center sm:text-left">
                        <div class="flex items-center justify-center sm:justify-start mb-2">
                            <span class="text-2xl font-bold tracking-tight mr-2">{"⚡ Courtside"}</span>
                            {health_badge}
                        </div>
                        <p class="text-blue-100 text-sm max-w-md">
                            {"Sports predictions with a transparent model. Pick a game, see the factors, check the call."}
                        </p>
                    </div>
                    <div class="text-center sm:text-right">
                        <p class="text-blue-100 text-sm">
                            {"© 2025 Courtside. All rights reserved."}
                        </p>
                        <p class="mt-1 text-xs text-blue-200 font-mono">
                            {"Frontend "}{Version::short()}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}

use yew::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::popular_matches::PopularMatches;

#[function_component(Guru)]
pub fn guru() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-5xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold text-gray-900">{"🔮 AI Sports Guru"}</h1>
                    <p class="mt-2 text-gray-600">{"Ask about any upcoming game and get picks with the reasoning behind them"}</p>
                </div>

                <ChatPanel />

                <div class="mt-10">
                    <PopularMatches />
                </div>
            </div>
        </div>
    }
}

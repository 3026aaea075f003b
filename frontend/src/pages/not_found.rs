use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-5xl font-bold text-gray-900 mb-4">{"404"}</h1>
                <p class="text-gray-600 mb-6">{"The page you're looking for doesn't exist."}</p>
                <Link<Route> to={Route::Home} classes="px-6 py-3 bg-blue-600 text-white rounded-md hover:bg-blue-700 font-medium">
                    {"← Back to Games"}
                </Link<Route>>
            </div>
        </div>
    }
}

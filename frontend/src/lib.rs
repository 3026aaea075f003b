use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav::Nav;

pub mod api;
pub mod chat;
pub mod components;
pub mod config;
pub mod minefield;
pub mod remote;
pub mod version;
pub mod pages {
    pub mod dashboard;
    pub mod game_details;
    pub mod guru;
    pub mod history;
    pub mod home;
    pub mod mines;
    pub mod not_found;
}

use pages::{
    dashboard::Dashboard, game_details::GameDetails, guru::Guru, history::History, home::Home,
    mines::Mines, not_found::NotFound,
};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/game/:game_id")]
    GameDetails { game_id: String },
    #[at("/history")]
    History,
    #[at("/dashboard")]
    Dashboard,
    #[at("/guru")]
    Guru,
    #[at("/mines")]
    Mines,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-container">
                <Nav />
                <main class="flex-1">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::GameDetails { game_id } => html! { <GameDetails game_id={game_id} /> },
        Route::History => html! { <History /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Guru => html! { <Guru /> },
        Route::Mines => html! { <Mines /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();

    Ok(())
}

// Entry point Trunk calls on load
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}

use crate::Route;
use shared::GameDto;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GameCardProps {
    pub game: GameDto,
}

#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let game = &props.game;
    html! {
        <Link<Route>
            to={Route::GameDetails { game_id: game.game_id.clone() }}
            classes={classes!("block", "h-full")}
        >
            <div class="h-full bg-white shadow rounded-lg p-6 cursor-pointer group hover:shadow-lg hover:-translate-y-0.5 transition-all duration-200">
                <div class="flex justify-end mb-4">
                    <span class="inline-flex items-center px-3 py-1 rounded-full text-xs font-bold uppercase bg-blue-100 text-blue-800">
                        {game.sport.to_uppercase()}
                    </span>
                </div>

                <div class="mb-6">
                    <h3 class="text-xl font-bold text-gray-900 group-hover:text-blue-600 transition-colors duration-200">
                        {&game.team_a}
                    </h3>
                    <p class="text-gray-500 text-sm my-2">{"vs"}</p>
                    <h3 class="text-xl font-bold text-gray-900 group-hover:text-blue-600 transition-colors duration-200">
                        {&game.team_b}
                    </h3>
                </div>

                <div class="border-t border-gray-200 my-4"></div>

                <div class="space-y-3 mb-4">
                    <div>
                        <p class="text-gray-500 text-xs uppercase tracking-wider mb-1">{"Scheduled"}</p>
                        <p class="text-gray-900 text-sm font-semibold">{game.schedule_display()}</p>
                    </div>
                    if let Some(result) = &game.result {
                        <div class="pt-2 border-t border-gray-200">
                            <p class="text-gray-500 text-xs uppercase tracking-wider mb-1">{"Result"}</p>
                            <p class="text-blue-600 font-bold text-sm">{result}</p>
                        </div>
                    }
                </div>

                <div class="text-blue-600 font-semibold text-sm group-hover:text-blue-700">
                    {"View Prediction →"}
                </div>
            </div>
        </Link<Route>>
    }
}

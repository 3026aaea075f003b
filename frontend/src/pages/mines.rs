use log::{error, warn};
use shared::{MinesSessionDto, TileRecommendationDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::feedback::{AlertBanner, ErrorPanel};
use crate::minefield::{
    clamp_bombs, draw_safe_outcome, preset_for, BoardAction, BoardPhase, BoardSession,
    GRID_PRESETS,
};
use crate::remote::{use_remote, RemoteState, UseRemoteHandle};

fn load_picks(picks: &UseRemoteHandle<Vec<TileRecommendationDto>>, game_id: String) {
    let picks = picks.clone();
    let ticket = picks.begin();
    spawn_local(async move {
        let outcome = api::mines::get_recommendations(&game_id)
            .await
            .map(|r| r.tiles)
            .map_err(|e| e.to_string());
        if let Err(e) = &outcome {
            warn!("Tile recommendations unavailable: {}", e);
        }
        picks.settle(ticket, outcome);
    });
}

#[function_component(Mines)]
pub fn mines() -> Html {
    let board = use_reducer(BoardSession::default);
    let creation = use_remote::<MinesSessionDto>();
    let picks = use_remote::<Vec<TileRecommendationDto>>();

    let grid_size = use_state(|| GRID_PRESETS[0].size);
    let num_bombs = use_state(|| GRID_PRESETS[0].default_bombs);
    let move_error = use_state(|| None::<String>);

    let on_size_change = {
        let grid_size = grid_size.clone();
        let num_bombs = num_bombs.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<u32>() {
                let preset = preset_for(size);
                grid_size.set(preset.size);
                num_bombs.set(preset.default_bombs);
            }
        })
    };

    let on_bombs_input = {
        let grid_size = grid_size.clone();
        let num_bombs = num_bombs.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Ok(requested) = input.value().parse::<u32>() {
                num_bombs.set(clamp_bombs(*grid_size, requested));
            }
        })
    };

    let on_start = {
        let board = board.clone();
        let creation = creation.clone();
        let picks = picks.clone();
        let grid_size = grid_size.clone();
        let num_bombs = num_bombs.clone();
        Callback::from(move |_: MouseEvent| {
            if creation.state().is_loading() {
                return;
            }
            let size = *grid_size;
            let bombs = *num_bombs;
            let board = board.clone();
            let creation = creation.clone();
            let picks = picks.clone();
            let ticket = creation.begin();
            spawn_local(async move {
                match api::mines::create_session(size, bombs).await {
                    Ok(session) => {
                        board.dispatch(BoardAction::Start {
                            game_id: session.game_id.clone(),
                            grid_size: size,
                            // Confirmed count; the server may not honor the request.
                            num_bombs: session.num_bombs,
                        });
                        load_picks(&picks, session.game_id.clone());
                        creation.settle(ticket, Ok(session));
                    }
                    Err(e) => {
                        error!("Failed to create mines session: {}", e);
                        creation.settle(ticket, Err(e.to_string()));
                    }
                }
            });
        })
    };

    let reveal = {
        let board = board.clone();
        let picks = picks.clone();
        let move_error = move_error.clone();
        Callback::from(move |(x, y): (u32, u32)| {
            if !board.accepts_click(x, y) {
                return;
            }
            let Some(game_id) = board.game_id.clone() else {
                return;
            };
            let safe = draw_safe_outcome();
            let board = board.clone();
            let picks = picks.clone();
            let move_error = move_error.clone();
            spawn_local(async move {
                match api::mines::report_click(&game_id, x, y, safe).await {
                    Ok(outcome) => {
                        board.dispatch(BoardAction::Move {
                            x,
                            y,
                            safe,
                            stats: outcome.stats,
                        });
                        load_picks(&picks, game_id);
                    }
                    Err(e) => {
                        // The grid stays as it was; the click can be retried.
                        error!("Failed to report move ({}, {}): {}", x, y, e);
                        move_error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let on_new_game = {
        let board = board.clone();
        let creation = creation.clone();
        let picks = picks.clone();
        let move_error = move_error.clone();
        Callback::from(move |_: MouseEvent| {
            board.dispatch(BoardAction::Reset);
            creation.reset();
            picks.reset();
            move_error.set(None);
        })
    };

    let dismiss_move_error = {
        let move_error = move_error.clone();
        Callback::from(move |_: MouseEvent| move_error.set(None))
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-6xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold text-gray-900">{"💣 Mines"}</h1>
                    <p class="mt-2 text-gray-600">{"Reveal safe tiles, dodge the bombs, and let the model suggest your next pick"}</p>
                </div>

                if matches!(board.phase, BoardPhase::Idle) {
                    {config_form(
                        *grid_size,
                        *num_bombs,
                        creation.state().is_loading(),
                        &on_size_change,
                        &on_bombs_input,
                        &on_start,
                    )}
                    if creation.state().error().is_some() {
                        <div class="mt-6">
                            <ErrorPanel
                                title="Unable to Start a New Game"
                                message="The game could not be created. Make sure the backend is running."
                                on_retry={on_start.clone()}
                            />
                        </div>
                    }
                } else {
                    <div class="flex justify-end mb-4">
                        <button
                            onclick={on_new_game.clone()}
                            class="px-4 py-2 bg-gray-300 text-gray-700 rounded-md hover:bg-gray-400"
                        >
                            {"New Game"}
                        </button>
                    </div>

                    if let Some(message) = &*move_error {
                        <div class="mb-4">
                            <AlertBanner
                                message={format!("Move failed: {}", message)}
                                on_dismiss={dismiss_move_error.clone()}
                            />
                        </div>
                    }

                    {stats_strip(&board)}

                    if matches!(board.phase, BoardPhase::Busted) {
                        {busted_panel(&board, &on_new_game)}
                    }

                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        <div class="lg:col-span-2">
                            {board_grid(&board, &picks, &reveal)}
                        </div>
                        {picks_sidebar(&board, &picks, &reveal)}
                    </div>
                }
            </div>
        </div>
    }
}

fn config_form(
    grid_size: u32,
    num_bombs: u32,
    starting: bool,
    on_size_change: &Callback<Event>,
    on_bombs_input: &Callback<InputEvent>,
    on_start: &Callback<MouseEvent>,
) -> Html {
    let preset = preset_for(grid_size);
    html! {
        <div class="bg-white shadow rounded-lg p-6 max-w-xl">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">{"Set Up Your Board"}</h2>
            <div class="space-y-4">
                <div>
                    <label for="grid-size" class="block text-sm font-medium text-gray-700 mb-2">
                        {"Grid Size"}
                    </label>
                    <select
                        id="grid-size"
                        value={grid_size.to_string()}
                        onchange={on_size_change.clone()}
                        class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                    >
                        {for GRID_PRESETS.iter().map(|preset| html! {
                            <option
                                value={preset.size.to_string()}
                                selected={preset.size == grid_size}
                            >
                                {format!("{0} × {0}", preset.size)}
                            </option>
                        })}
                    </select>
                </div>
                <div>
                    <label for="num-bombs" class="block text-sm font-medium text-gray-700 mb-2">
                        {"Bombs"}
                    </label>
                    <input
                        id="num-bombs"
                        type="number"
                        min={preset.min_bombs.to_string()}
                        max={preset.max_bombs.to_string()}
                        value={num_bombs.to_string()}
                        oninput={on_bombs_input.clone()}
                        class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                    />
                    <p class="mt-1 text-xs text-gray-500">
                        {format!("Between {} and {} bombs for this grid", preset.min_bombs, preset.max_bombs)}
                    </p>
                </div>
                <button
                    onclick={on_start.clone()}
                    disabled={starting}
                    class="w-full px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                >
                    {if starting { "Starting..." } else { "Start Game" }}
                </button>
            </div>
        </div>
    }
}

fn stats_strip(board: &BoardSession) -> Html {
    let (status, status_class) = match board.phase {
        BoardPhase::Busted => ("BUSTED", "text-red-600"),
        _ => ("ACTIVE", "text-green-600"),
    };
    html! {
        <div class="grid grid-cols-2 sm:grid-cols-4 gap-4 mb-6">
            {stat_tile("Safe Clicks", board.stats.safe_clicks.to_string(), "text-gray-900")}
            {stat_tile("Bombs Hit", board.stats.bombs_hit.to_string(), "text-gray-900")}
            {stat_tile("Bombs Remaining", board.stats.bombs_remaining.to_string(), "text-gray-900")}
            {stat_tile("Status", status.to_string(), status_class)}
        </div>
    }
}

fn stat_tile(label: &str, value: String, value_class: &'static str) -> Html {
    html! {
        <div class="bg-white shadow rounded-lg p-4 text-center">
            <p class="text-xs font-medium text-gray-500 uppercase tracking-wider mb-1">{label}</p>
            <p class={format!("text-2xl font-bold {}", value_class)}>{value}</p>
        </div>
    }
}

fn busted_panel(board: &BoardSession, on_new_game: &Callback<MouseEvent>) -> Html {
    let clicks = board.stats.safe_clicks;
    html! {
        <div class="bg-white border-2 border-red-300 shadow rounded-lg p-6 mb-6 text-center">
            <h3 class="text-2xl font-bold text-red-600 mb-2">{"💥 You hit a mine!"}</h3>
            <p class="text-gray-600 mb-4">
                {format!(
                    "You made {} safe click{} before busting.",
                    clicks,
                    if clicks == 1 { "" } else { "s" }
                )}
            </p>
            <button
                onclick={on_new_game.clone()}
                class="px-6 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 font-medium"
            >
                {"Play Again"}
            </button>
        </div>
    }
}

fn board_grid(
    board: &BoardSession,
    picks: &UseRemoteHandle<Vec<TileRecommendationDto>>,
    reveal: &Callback<(u32, u32)>,
) -> Html {
    let n = board.grid_size;
    let pick_list = picks.state().value().map(Vec::as_slice).unwrap_or(&[]);
    let busted = matches!(board.phase, BoardPhase::Busted);

    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <div
                class="grid gap-2"
                style={format!("grid-template-columns: repeat({}, minmax(0, 1fr))", n)}
            >
                {for board.cells.iter().enumerate().map(|(index, cell)| {
                    let x = index as u32 % n;
                    let y = index as u32 / n;
                    let pick = pick_at(pick_list, x, y);
                    let onclick = {
                        let reveal = reveal.clone();
                        Callback::from(move |_: MouseEvent| reveal.emit((x, y)))
                    };

                    let (class, glyph) = if cell.revealed && cell.is_mine {
                        ("bg-red-500 text-white", "💣")
                    } else if cell.revealed {
                        ("bg-green-500 text-white", "✅")
                    } else if pick.is_some_and(|p| p.is_likely_safe()) {
                        ("bg-green-100 border-2 border-green-400 hover:bg-green-200", "?")
                    } else if pick.is_some_and(|p| p.is_likely_mine()) {
                        ("bg-red-100 border-2 border-red-400 hover:bg-red-200", "?")
                    } else {
                        ("bg-gray-200 hover:bg-gray-300", "?")
                    };
                    let title = pick
                        .filter(|_| !cell.revealed)
                        .map(|p| format!("{}% safe", p.safe_percent()));

                    html! {
                        <button
                            key={index}
                            {onclick}
                            {title}
                            disabled={busted || cell.revealed}
                            class={format!(
                                "aspect-square rounded-md text-lg font-bold transition-colors {}",
                                class
                            )}
                        >
                            {glyph}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

fn pick_at(list: &[TileRecommendationDto], x: u32, y: u32) -> Option<&TileRecommendationDto> {
    list.iter().find(|tile| tile.x == x && tile.y == y)
}

fn picks_sidebar(
    board: &BoardSession,
    picks: &UseRemoteHandle<Vec<TileRecommendationDto>>,
    reveal: &Callback<(u32, u32)>,
) -> Html {
    let busted = matches!(board.phase, BoardPhase::Busted);
    let body = match picks.state() {
        RemoteState::Idle | RemoteState::Loading => html! {
            <div class="text-center py-6">
                <div class="inline-block animate-spin rounded-full h-6 w-6 border-b-2 border-blue-600"></div>
                <p class="mt-2 text-sm text-gray-600">{"Crunching the numbers..."}</p>
            </div>
        },
        // A failed fetch falls back to the empty hint; every move refetches.
        RemoteState::Failed(_) => html! {
            <p class="text-sm text-gray-500 py-4">{"Start clicking tiles to get recommendations."}</p>
        },
        RemoteState::Ready(list) if list.is_empty() => html! {
            <p class="text-sm text-gray-500 py-4">{"Start clicking tiles to get recommendations."}</p>
        },
        // The first three entries, in the order the server ranked them.
        RemoteState::Ready(list) => html! {
            <div class="space-y-3">
                {for list.iter().take(3).enumerate().map(|(rank, pick)| {
                    pick_card(board, pick, rank, reveal, busted)
                })}
            </div>
        },
    };

    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-3">{"🎯 Top Picks"}</h3>
            {body}
        </div>
    }
}

fn pick_card(
    board: &BoardSession,
    pick: &TileRecommendationDto,
    rank: usize,
    reveal: &Callback<(u32, u32)>,
    busted: bool,
) -> Html {
    let x = pick.x;
    let y = pick.y;
    let revealed = board.cell_at(x, y).map(|c| c.revealed).unwrap_or(true);
    let onclick = {
        let reveal = reveal.clone();
        Callback::from(move |_: MouseEvent| reveal.emit((x, y)))
    };
    let tag_class = if pick.tag() == "Safe Bet" {
        "bg-green-100 text-green-800"
    } else {
        "bg-yellow-100 text-yellow-800"
    };

    html! {
        <button
            key={format!("{}-{}", x, y)}
            {onclick}
            disabled={busted || revealed}
            class="w-full flex items-center gap-3 p-3 border border-gray-200 rounded-lg hover:border-blue-400 hover:bg-blue-50 disabled:opacity-50 disabled:cursor-not-allowed text-left"
        >
            <span class="flex-shrink-0 w-6 h-6 rounded-full bg-blue-600 text-white text-xs font-bold flex items-center justify-center">
                {rank + 1}
            </span>
            <span class="flex-1">
                <span class="block text-sm font-medium text-gray-900">
                    {format!("Tile ({}, {})", x, y)}
                </span>
                <span class="block text-xs text-gray-500">
                    {format!("{}% safe", pick.safe_percent())}
                </span>
            </span>
            <span class={format!("px-2 py-0.5 rounded-full text-xs font-medium {}", tag_class)}>
                {pick.tag()}
            </span>
        </button>
    }
}

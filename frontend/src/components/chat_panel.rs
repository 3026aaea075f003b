use crate::api;
use crate::chat::{ChatAction, ChatAuthor, ChatLog, ChatMessage};
use crate::Route;
use log::error;
use shared::{format_schedule_date, ChatRequestDto, GamePickDto};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Embedded guru conversation. The log itself lives in [`crate::chat`]; this
/// component owns the draft input and the scroll position.
#[function_component(ChatPanel)]
pub fn chat_panel() -> Html {
    let log = use_reducer(ChatLog::seeded);
    let draft = use_state(String::new);
    let tail = use_node_ref();

    // Keep the newest message in view.
    {
        let tail = tail.clone();
        use_effect_with(log.messages.len(), move |_| {
            if let Some(element) = tail.cast::<web_sys::Element>() {
                element.scroll_into_view();
            }
        });
    }

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let on_send = {
        let log = log.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            submit(&log, &draft);
        })
    };

    let on_keypress = {
        let log = log.clone();
        let draft = draft.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit(&log, &draft);
            }
        })
    };

    let send_disabled = log.awaiting_reply || draft.trim().is_empty();

    html! {
        <div class="bg-white shadow rounded-lg flex flex-col h-[32rem]">
            <div class="px-6 py-4 border-b border-gray-200">
                <h2 class="text-lg font-semibold text-gray-900">{"🔮 Sports Guru"}</h2>
                <p class="text-sm text-gray-500">{"Ask about any upcoming game"}</p>
            </div>

            <div class="flex-1 overflow-y-auto px-6 py-4 space-y-4">
                {for log.messages.iter().map(message_bubble)}
                if log.awaiting_reply {
                    {typing_indicator()}
                }
                <div ref={tail}></div>
            </div>

            <div class="px-6 py-4 border-t border-gray-200">
                <div class="flex gap-2">
                    <input
                        type="text"
                        placeholder="Ask about upcoming games..."
                        value={(*draft).clone()}
                        oninput={on_input}
                        onkeypress={on_keypress}
                        disabled={log.awaiting_reply}
                        class="flex-1 px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500 disabled:bg-gray-50"
                    />
                    <button
                        onclick={on_send}
                        disabled={send_disabled}
                        class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {"Send"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn submit(log: &UseReducerHandle<ChatLog>, draft: &UseStateHandle<String>) {
    let text = draft.trim().to_string();
    if text.is_empty() || log.awaiting_reply {
        return;
    }
    log.dispatch(ChatAction::Send { text: text.clone() });
    draft.set(String::new());

    let log = log.clone();
    spawn_local(async move {
        match api::chat::send_message(&ChatRequestDto::anonymous(text)).await {
            Ok(reply) => log.dispatch(ChatAction::ReplyArrived {
                text: reply.ai_message,
                sent_at: reply.timestamp,
                picks: reply.suggested_games,
            }),
            Err(e) => {
                error!("Chat send failed: {}", e);
                log.dispatch(ChatAction::ReplyFailed);
            }
        }
    });
}

fn message_bubble(message: &ChatMessage) -> Html {
    match message.author {
        ChatAuthor::User => html! {
            <div class="flex justify-end">
                <div class="max-w-[80%] px-4 py-2 rounded-2xl rounded-br-sm bg-blue-600 text-white text-sm">
                    {&message.text}
                </div>
            </div>
        },
        ChatAuthor::Guru => html! {
            <div class="flex flex-col items-start gap-2">
                <div class="max-w-[80%] px-4 py-2 rounded-2xl rounded-bl-sm bg-gray-100 text-gray-900 text-sm whitespace-pre-line">
                    {&message.text}
                </div>
                if !message.picks.is_empty() {
                    <div class="w-full grid gap-2 sm:grid-cols-2">
                        {for message.picks.iter().map(pick_card)}
                    </div>
                }
            </div>
        },
    }
}

fn pick_card(pick: &GamePickDto) -> Html {
    html! {
        <Link<Route>
            to={Route::GameDetails { game_id: pick.game_id.clone() }}
            classes={classes!("block")}
        >
            <div class="border border-gray-200 rounded-lg p-3 hover:border-blue-400 hover:shadow transition-all duration-200 cursor-pointer">
                <div class="flex justify-between items-center mb-1">
                    <span class="inline-flex items-center px-2 py-0.5 rounded-full text-[10px] font-bold uppercase bg-blue-100 text-blue-800">
                        {&pick.sport}
                    </span>
                    <span class="text-sm font-bold text-blue-600">{pick.confidence_display()}</span>
                </div>
                <p class="text-sm font-semibold text-gray-900">{pick.matchup()}</p>
                <p class="text-xs text-gray-500 mb-1">
                    {"📅 "}{format_schedule_date(&pick.scheduled_date)}
                </p>
                <p class="text-xs text-gray-700 truncate">{"⚡ "}{&pick.predicted_outcome}</p>
                if let Some(reason) = pick.reasoning_headline() {
                    <p class="text-xs text-gray-500 truncate mt-1">{reason}</p>
                }
            </div>
        </Link<Route>>
    }
}

fn typing_indicator() -> Html {
    html! {
        <div class="flex justify-start">
            <div class="px-4 py-3 rounded-2xl rounded-bl-sm bg-gray-100 flex gap-1">
                <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce"></span>
                <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce [animation-delay:0.15s]"></span>
                <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce [animation-delay:0.3s]"></span>
            </div>
        </div>
    }
}

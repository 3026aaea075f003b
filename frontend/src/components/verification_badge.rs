use crate::api;
use log::warn;
use shared::GameStatusDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VerificationBadgeProps {
    pub game_id: String,
}

/// Decorates a completed game's result with how it was recorded. Best-effort:
/// while the status is unknown, and on any failure, nothing renders.
#[function_component(VerificationBadge)]
pub fn verification_badge(props: &VerificationBadgeProps) -> Html {
    let status = use_state(|| None::<GameStatusDto>);

    {
        let status = status.clone();
        use_effect_with(props.game_id.clone(), move |game_id| {
            let game_id = game_id.clone();
            status.set(None);
            spawn_local(async move {
                match api::games::get_game_status(&game_id).await {
                    Ok(fetched) => status.set(Some(fetched)),
                    Err(e) => {
                        warn!("Verification status unavailable for {}: {}", game_id, e);
                    }
                }
            });
        });
    }

    match &*status {
        Some(status) => {
            let tone = if status.is_auto_verified() {
                classes!("bg-green-100", "text-green-800")
            } else {
                classes!("bg-gray-100", "text-gray-700")
            };
            html! {
                <span class={classes!(
                    "inline-flex", "items-center", "px-2.5", "py-0.5",
                    "rounded-full", "text-xs", "font-medium", tone
                )}>
                    {status.badge_label()}
                </span>
            }
        }
        None => html! {},
    }
}

//! Shared loading, error, empty and alert panels used across pages.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingPanelProps {
    pub message: String,
}

#[function_component(LoadingPanel)]
pub fn loading_panel(props: &LoadingPanelProps) -> Html {
    html! {
        <div class="p-8 text-center">
            <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
            <p class="mt-2 text-gray-600">{&props.message}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub title: String,
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<MouseEvent>>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    html! {
        <div class="p-8 text-center">
            <div class="text-red-600 mb-2">
                <svg class="mx-auto h-12 w-12" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-2.5L13.732 4c-.77-.833-1.964-.833-2.732 0L3.732 16.5c-.77.833.192 2.5 1.732 2.5z" />
                </svg>
            </div>
            <h3 class="text-lg font-medium text-gray-900 mb-2">{&props.title}</h3>
            <p class="text-gray-500 mb-4">{&props.message}</p>
            if let Some(on_retry) = &props.on_retry {
                <button
                    onclick={on_retry.clone()}
                    class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2"
                >
                    {"Retry"}
                </button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyPanelProps {
    pub title: String,
    pub message: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyPanel)]
pub fn empty_panel(props: &EmptyPanelProps) -> Html {
    html! {
        <div class="p-8 text-center border-2 border-dashed border-gray-300 rounded-lg bg-white">
            <div class="text-gray-400 mb-4">
                <svg class="mx-auto h-12 w-12" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9.172 16.172a4 4 0 015.656 0M9 12h6m-6-4h6m2 5.291A7.962 7.962 0 0112 15c-2.34 0-4.29-1.009-5.824-2.571" />
                </svg>
            </div>
            <h3 class="text-lg font-medium text-gray-900 mb-2">{&props.title}</h3>
            <p class="text-gray-500">{&props.message}</p>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertBannerProps {
    pub message: String,
    pub on_dismiss: Callback<MouseEvent>,
}

/// Blocking but dismissible failure notice. The triggering control stays on
/// screen behind it so the user can retry after dismissing.
#[function_component(AlertBanner)]
pub fn alert_banner(props: &AlertBannerProps) -> Html {
    html! {
        <div class="flex items-start justify-between gap-4 p-4 mb-4 bg-red-50 border border-red-200 rounded-md">
            <p class="text-sm text-red-700">{&props.message}</p>
            <button
                onclick={props.on_dismiss.clone()}
                class="text-sm font-medium text-red-700 hover:text-red-900 whitespace-nowrap"
            >
                {"Dismiss"}
            </button>
        </div>
    }
}

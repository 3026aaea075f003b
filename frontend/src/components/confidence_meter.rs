use shared::confidence_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfidenceMeterProps {
    /// Model confidence in [0, 1].
    pub confidence: f64,
}

#[function_component(ConfidenceMeter)]
pub fn confidence_meter(props: &ConfidenceMeterProps) -> Html {
    let percent = confidence_percent(props.confidence);
    html! {
        <div class="w-full">
            <div class="flex justify-between items-center mb-2">
                <span class="text-base font-semibold text-gray-700">{"Confidence"}</span>
                <span class="text-base font-bold text-blue-600">{format!("{}%", percent)}</span>
            </div>
            <div class="h-3 w-full bg-gray-200 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-blue-500 to-indigo-600 rounded-full transition-all duration-300"
                    style={format!("width: {}%", percent)}
                ></div>
            </div>
        </div>
    }
}

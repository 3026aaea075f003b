use shared::ContributionPair;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FactorBreakdownProps {
    pub team_a: String,
    pub team_b: String,
    pub contributions: BTreeMap<String, ContributionPair>,
}

/// Per-factor contribution bars, one per participant. Bar widths are scaled
/// against the factor's own larger contribution so the stronger side always
/// fills the track; labels show the raw percent.
#[function_component(FactorBreakdown)]
pub fn factor_breakdown(props: &FactorBreakdownProps) -> Html {
    if props.contributions.is_empty() {
        return html! {};
    }
    html! {
        <div class="space-y-4">
            {for props.contributions.iter().map(|(name, pair)| html! {
                <div class="bg-white border border-gray-200 rounded-lg p-4">
                    <p class="text-sm font-semibold text-gray-900 mb-3">{name}</p>
                    <div class="space-y-2">
                        {contribution_bar(&props.team_a, pair.team_a, pair)}
                        {contribution_bar(&props.team_b, pair.team_b, pair)}
                    </div>
                </div>
            })}
        </div>
    }
}

fn contribution_bar(team: &str, value: f64, pair: &ContributionPair) -> Html {
    html! {
        <div>
            <div class="flex justify-between items-center mb-1">
                <span class="text-xs text-gray-600">{team}</span>
                <span class="text-xs font-medium text-gray-900">
                    {ContributionPair::label_percent(value)}
                </span>
            </div>
            <div class="h-2 w-full bg-gray-200 rounded-full overflow-hidden">
                <div
                    class="h-full bg-blue-500 rounded-full"
                    style={format!("width: {:.1}%", pair.bar_percent(value))}
                ></div>
            </div>
        </div>
    }
}

use yew::prelude::*;

/// Bullet icons cycle in server order; the sixth reason reuses the first
/// icon.
const REASON_ICONS: [&str; 5] = ["⚡", "📊", "🏆", "💯", "🎯"];

#[derive(Properties, PartialEq)]
pub struct ReasonItemProps {
    pub index: usize,
    pub reason: String,
}

#[function_component(ReasonItem)]
pub fn reason_item(props: &ReasonItemProps) -> Html {
    let icon = REASON_ICONS[props.index % REASON_ICONS.len()];
    html! {
        <div class="flex items-start gap-4 p-4 bg-white border border-gray-200 rounded-lg hover:border-blue-400 transition-colors duration-200">
            <div class="flex-shrink-0 w-8 h-8 flex items-center justify-center rounded-full bg-blue-100 text-lg">
                {icon}
            </div>
            <p class="flex-1 text-gray-700 text-sm sm:text-base leading-relaxed">{&props.reason}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_palette_wraps_after_five() {
        assert_eq!(REASON_ICONS[0 % REASON_ICONS.len()], "⚡");
        assert_eq!(REASON_ICONS[4 % REASON_ICONS.len()], "🎯");
        assert_eq!(REASON_ICONS[5 % REASON_ICONS.len()], "⚡");
        assert_eq!(REASON_ICONS[7 % REASON_ICONS.len()], "🏆");
    }
}

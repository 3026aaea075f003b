use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const LINKS: [(Route, &str, &str); 5] = [
    (Route::Home, "🏀", "Games"),
    (Route::History, "📜", "Past Games"),
    (Route::Dashboard, "📊", "Dashboard"),
    (Route::Guru, "🔮", "Guru"),
    (Route::Mines, "💣", "Mines"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::Home);
    let is_mobile_menu_open = use_state(|| false);

    let toggle_mobile_menu = {
        let is_mobile_menu_open = is_mobile_menu_open.clone();
        Callback::from(move |_| {
            is_mobile_menu_open.set(!*is_mobile_menu_open);
        })
    };

    // Close mobile menu when navigating
    let close_mobile_menu = {
        let is_mobile_menu_open = is_mobile_menu_open.clone();
        Callback::from(move |_| {
            is_mobile_menu_open.set(false);
        })
    };

    let desktop_link = |route: &Route, label: &str| {
        let active = current_route == *route;
        html! {
            <Link<Route>
                to={route.clone()}
                classes={classes!(
                    "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
                    "transition-colors", "duration-200", "min-h-[44px]", "flex", "items-center",
                    if active {
                        classes!("bg-white/20", "text-white")
                    } else {
                        classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
                    }
                )}
            >
                {label}
            </Link<Route>>
        }
    };

    let mobile_link = |route: &Route, icon: &str, label: &str| {
        let active = current_route == *route;
        html! {
            <div onclick={close_mobile_menu.clone()}>
                <Link<Route>
                    to={route.clone()}
                    classes={classes!(
                        "block", "px-4", "py-3", "rounded-lg", "text-base", "font-medium",
                        "transition-all", "duration-200", "min-h-[48px]", "flex", "items-center",
                        "active:scale-95", "active:bg-white/20",
                        if active {
                            classes!("bg-white/20", "text-white", "shadow-lg")
                        } else {
                            classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
                        }
                    )}
                >
                    <span class={classes!("mr-3", "text-lg")}>{icon}</span>
                    {label}
                </Link<Route>>
            </div>
        }
    };

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-800", "to-blue-600",
            "text-white", "shadow-lg", "backdrop-blur-sm"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    // Left side - Logo and main nav
                    <div class={classes!("flex", "items-center", "space-x-4", "sm:space-x-8")}>
                        <Link<Route> to={Route::Home} classes={classes!(
                            "flex", "items-baseline", "space-x-1", "hover:transform",
                            "hover:-translate-y-0.5", "transition-transform", "duration-200",
                            "active:scale-95"
                        )}>
                            <span class={classes!("text-lg", "sm:text-xl", "font-medium", "bg-white", "text-blue-600", "px-2", "py-0.5", "rounded")}>
                                {"⚡ Courtside"}
                            </span>
                        </Link<Route>>

                        // Desktop navigation - hidden on mobile
                        <div class={classes!("hidden", "md:flex", "space-x-6")}>
                            {for LINKS.iter().map(|(route, _, label)| desktop_link(route, label))}
                        </div>
                    </div>

                    // Right side - mobile menu button
                    <div class={classes!("flex", "items-center")}>
                        <button
                            onclick={toggle_mobile_menu}
                            class={classes!(
                                "md:hidden", "inline-flex", "items-center", "justify-center", "p-3",
                                "rounded-md", "text-white", "hover:bg-white/10", "focus:outline-none",
                                "focus:ring-2", "focus:ring-inset", "focus:ring-white", "min-h-[44px]", "min-w-[44px]",
                                "active:scale-95", "transition-transform", "duration-150"
                            )}
                            aria-label="Toggle mobile menu"
                        >
                            <div class={classes!(
                                "w-6", "h-6", "flex", "flex-col", "justify-center", "items-center",
                                if *is_mobile_menu_open { classes!("space-y-0") } else { classes!("space-y-1.5") }
                            )}>
                                <span class={classes!(
                                    "block", "w-6", "h-0.5", "bg-white", "transform",
                                    "transition-all", "duration-300", "origin-center",
                                    if *is_mobile_menu_open { classes!("rotate-45", "translate-y-0.5") } else { classes!() }
                                )}></span>
                                <span class={classes!(
                                    "block", "w-6", "h-0.5", "bg-white", "transition-all", "duration-300",
                                    if *is_mobile_menu_open { classes!("opacity-0") } else { classes!() }
                                )}></span>
                                <span class={classes!(
                                    "block", "w-6", "h-0.5", "bg-white", "transform",
                                    "transition-all", "duration-300", "origin-center",
                                    if *is_mobile_menu_open { classes!("-rotate-45", "-translate-y-0.5") } else { classes!() }
                                )}></span>
                            </div>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <div class={classes!(
                "md:hidden", "transition-all", "duration-300", "ease-in-out", "border-t", "border-white/10",
                if *is_mobile_menu_open {
                    classes!("max-h-96", "opacity-100", "visible")
                } else {
                    classes!("max-h-0", "opacity-0", "invisible", "overflow-hidden")
                }
            )}>
                <div class={classes!("px-4", "pt-4", "pb-6", "space-y-2", "bg-gradient-to-b", "from-slate-800/95", "to-blue-600/95", "backdrop-blur-sm")}>
                    {for LINKS.iter().map(|(route, icon, label)| mobile_link(route, icon, label))}
                </div>
            </div>
        </nav>
    }
}

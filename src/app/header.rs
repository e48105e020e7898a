use leptos::prelude::*;
use leptos_router::components::A;

use crate::mode::{use_dev_mode, DevMode};
use crate::theme::use_theme;

const NAV_ITEMS: [(&str, &str); 3] = [
    ("About", "#about"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let dev_mode = expect_context::<DevMode>();
    let theme = use_theme();
    let is_dev = use_dev_mode();

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 border-b border-muted/30 bg-background/95 backdrop-blur-sm">
            <div class="container mx-auto px-6 h-16 flex items-center justify-between">
                <A href="/" attr:class="text-xl font-bold hover:opacity-70 transition-opacity">
                    "Bethe Bayou"
                </A>

                <div class="flex items-center gap-4">
                    <nav class="hidden md:flex items-center gap-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <a
                                        href=*href
                                        class="text-sm font-medium text-muted hover:text-foreground transition-colors"
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="flex items-center gap-2">
                        <button
                            class="p-2 rounded-md hover:bg-muted/20 transition-colors"
                            title=move || {
                                if theme.is_dark.get() { "Light mode" } else { "Dark mode" }
                            }
                            aria-label="Toggle theme"
                            on:click=move |_| theme.toggle()
                        >
                            {move || if theme.is_dark.get() { "☀" } else { "☾" }}
                        </button>

                        <button
                            class=move || {
                                if is_dev.get() {
                                    "p-2 border-2 border-foreground bg-foreground text-background font-mono"
                                } else {
                                    "p-2 rounded-md hover:bg-muted/20 transition-colors font-mono"
                                }
                            }
                            title="Toggle dev mode"
                            aria-label="Toggle dev mode"
                            on:click=move |_| dev_mode.toggle()
                        >
                            ">_"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

use leptos::prelude::*;

use super::viewport::use_viewport;

const SOLID_AFTER_PX: i32 = 48;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#about", "about"),
    ("#career", "career"),
    ("#projects", "projects"),
    ("#skills", "skills"),
    ("#contact", "contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let viewport = use_viewport();
    let solid = Memo::new(move |_| viewport.get().scroll_position > SOLID_AFTER_PX);

    view! {
        <header class=move || {
            if solid.get() {
                "fixed top-0 inset-x-0 z-40 bg-night/90 backdrop-blur border-b border-cyan-500/30 shadow-neon transition-colors duration-300"
            } else {
                "fixed top-0 inset-x-0 z-40 bg-transparent border-b border-transparent transition-colors duration-300"
            }
        }>
            <nav class="mx-auto max-w-6xl flex flex-wrap items-center justify-between px-4 sm:px-6 lg:px-8 py-3">
                <a href="#top" class="text-xl font-bold neon-text text-neon-cyan">
                    "kai"
                    <span class="text-neon-pink">"@"</span>
                    "moreno"
                    <span class="animate-pulse">"_"</span>
                </a>
                <ul class="flex flex-wrap gap-4 text-sm">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <a
                                        href=*href
                                        class="text-foreground/80 hover:text-neon-cyan transition-colors duration-200"
                                    >
                                        <span class="text-neon-pink">"./"</span>
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

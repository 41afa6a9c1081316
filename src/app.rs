mod career;
mod contact;
mod header;
mod homepage;
pub mod lazy;
mod projects;
pub mod reveal;
mod skills;
pub mod viewport;

use chrono::DateTime;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::{MotionConfig, DEFAULT_DURATION_MS, DEFAULT_LOAD_AHEAD};
use header::Header;
use homepage::HomePage;
use viewport::provide_viewport;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/neon-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-mono bg-night text-foreground scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(page_motion());
    provide_viewport();

    view! {
        <Title formatter=|title| format!("Kai Moreno - {title}") />
        <Meta
            name="description"
            content="Portfolio of Kai Moreno, engineer building applied AI systems."
        />

        <Router>
            <Header />
            <main class="flex flex-col items-center mx-auto w-full max-w-6xl px-4 sm:px-6 lg:px-8">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Reveal line at 85% of the viewport height.
const PAGE_REVEAL_THRESHOLD: f64 = 0.15;

fn page_motion() -> MotionConfig {
    MotionConfig::new(
        PAGE_REVEAL_THRESHOLD,
        DEFAULT_LOAD_AHEAD,
        DEFAULT_DURATION_MS,
        0,
    )
    .inspect_err(|e| log::warn!("falling back to default motion config: {e}"))
    .unwrap_or_default()
}

/// Server-renders `f` under the same contexts `App` provides.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_with_page_context<F, V>(f: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| {
        provide_context(page_motion());
        provide_viewport();
        f().to_html()
    })
}

#[component]
fn Footer() -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.format("%b %e %Y").to_string())
        .unwrap_or_default();
    view! {
        <footer class="w-full border-t border-cyan-500/20 mt-16 py-6 text-center text-sm text-muted">
            <span class="text-neon-pink">"//"</span>
            " built with Rust + Leptos · last deployed "
            <span class="text-neon-cyan">{built}</span>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::page_motion;
    use crate::viewport::{ElementTop, ViewportState};
    use crate::visibility::should_reveal;

    #[test]
    fn page_reveal_line_sits_at_85_percent() {
        let threshold = page_motion().reveal_threshold;
        let viewport = ViewportState::new(0, 800);
        assert!(should_reveal(ElementTop::Measured(679), viewport, threshold));
        assert!(!should_reveal(ElementTop::Measured(681), viewport, threshold));
    }

    #[test]
    fn shell_links_only_shipped_assets() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let source = std::fs::read_to_string(root.join("src/app.rs")).unwrap();
        let shell = source
            .split("pub fn shell")
            .nth(1)
            .and_then(|rest| rest.split("#[component]").next())
            .unwrap();
        let hrefs = shell
            .split("href=\"/")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect::<Vec<_>>();
        assert!(!hrefs.is_empty());
        for href in hrefs {
            assert!(
                href.starts_with("pkg/") || root.join("public").join(href).is_file(),
                "/{href} is linked but not shipped"
            );
        }
    }
}

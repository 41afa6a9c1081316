use leptos::prelude::*;

use super::reveal::AnimatedSection;
use crate::motion::AnimationKind;

const EMAIL: &str = "hello@kaimoreno.dev";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section class="py-16 flex justify-center">
            <AnimatedSection animation=AnimationKind::ScaleIn class="w-full max-w-2xl text-center">
                <h2 class="text-2xl font-bold mb-6">
                    <span class="text-neon-pink">"05. "</span>
                    "Contact"
                </h2>
                <div class="bg-black/40 p-6 rounded-lg border border-neon-cyan/40 shadow-neon">
                    <p class="text-lg mb-4 text-neon-cyan font-medium">
                        "Open to interesting problems and good teams"
                    </p>
                    <p class="mb-6">
                        "Whether it is a role, a collaboration, or a question about one of the projects above, my inbox is open."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <a
                            href=format!("mailto:{EMAIL}")
                            class="bg-cyan-500/20 hover:bg-cyan-500/30 text-neon-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-neon-cyan/30"
                        >
                            {EMAIL}
                        </a>
                        <div class="flex gap-4">
                            <a
                                href="https://github.com/kaimoreno"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-foreground hover:text-neon-cyan text-2xl"
                                aria-label="GitHub Profile"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href="https://linkedin.com/in/kaimoreno"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-foreground hover:text-neon-cyan text-2xl"
                                aria-label="LinkedIn Profile"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                        </div>
                    </div>
                </div>
            </AnimatedSection>
        </section>
    }
}

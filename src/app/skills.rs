use leptos::{html, prelude::*};

use super::reveal::{use_reveal, AnimatedSection, Reveal, RevealOptions};
use crate::config::MotionConfig;
use crate::motion::AnimationKind;

const SKILL_GROUPS: [(&str, &[(&str, u8)]); 3] = [
    (
        "Machine Learning",
        &[("PyTorch", 90), ("Retrieval & ranking", 85), ("LLM evaluation", 80)],
    ),
    (
        "Systems",
        &[("Rust", 85), ("Python", 95), ("Go", 70), ("PostgreSQL", 80)],
    ),
    (
        "Infrastructure",
        &[("Kubernetes", 75), ("Triton / ONNX Runtime", 70), ("Terraform", 65)],
    ),
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section class="py-16">
            <AnimatedSection animation=AnimationKind::SlideUp>
                <h2 class="text-2xl font-bold mb-10">
                    <span class="text-neon-pink">"04. "</span>
                    "Skills"
                </h2>
            </AnimatedSection>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {SKILL_GROUPS
                    .iter()
                    .map(|(group, skills)| {
                        view! {
                            <div>
                                <h3 class="text-neon-yellow font-bold mb-4">{*group}</h3>
                                <div class="space-y-4">
                                    {skills
                                        .iter()
                                        .map(|(name, level)| view! { <SkillBar name=*name level=*level /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Horizontal meter that fills to `level` percent as it is revealed.
#[component]
fn SkillBar(name: &'static str, level: u8) -> impl IntoView {
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let node_ref = NodeRef::<html::Div>::new();
    let Reveal { progress, .. } = use_reveal(node_ref, RevealOptions::resolve(&config, None, None));
    let level = f64::from(level.min(100));

    view! {
        <div node_ref=node_ref>
            <div class="flex justify-between text-sm mb-1">
                <span>{name}</span>
                <span class="text-neon-cyan">
                    {move || format!("{:.0}%", level * progress.get())}
                </span>
            </div>
            <div class="h-2 w-full rounded bg-white/10 overflow-hidden">
                <div
                    class="h-full rounded bg-gradient-to-r from-neon-pink to-neon-cyan shadow-neon"
                    style=move || format!("width: {:.2}%;", level * progress.get())
                ></div>
            </div>
        </div>
    }
}

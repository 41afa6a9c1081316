use leptos::prelude::*;

use super::reveal::AnimatedSection;
use crate::motion::AnimationKind;

struct Role {
    period: &'static str,
    title: &'static str,
    company: &'static str,
    highlights: &'static [&'static str],
}

const ROLES: [Role; 4] = [
    Role {
        period: "2022 - now",
        title: "Staff ML Engineer",
        company: "Lumen Search",
        highlights: &[
            "Led the move from keyword search to hybrid retrieval with learned re-ranking",
            "Cut p99 inference latency from 900ms to 140ms with distillation and batching",
        ],
    },
    Role {
        period: "2019 - 2022",
        title: "Senior Software Engineer",
        company: "Parcelwise",
        highlights: &[
            "Built the routing-time prediction service used on every checkout",
            "Owned the feature store and its backfill tooling",
        ],
    },
    Role {
        period: "2016 - 2019",
        title: "Backend Engineer",
        company: "Tessellate Labs",
        highlights: &[
            "Wrote the event ingestion pipeline, ~40k events/s at peak",
            "Introduced contract tests between twelve internal services",
        ],
    },
    Role {
        period: "2014 - 2016",
        title: "Software Engineer",
        company: "Northwind Analytics",
        highlights: &["Reporting APIs and the first in-house experimentation framework"],
    },
];

#[component]
pub fn Career() -> impl IntoView {
    view! {
        <section class="py-16">
            <AnimatedSection animation=AnimationKind::SlideUp>
                <h2 class="text-2xl font-bold mb-10">
                    <span class="text-neon-pink">"02. "</span>
                    "Career"
                </h2>
            </AnimatedSection>
            <ol class="relative border-l border-cyan-500/40 ml-3 space-y-10">
                {ROLES
                    .iter()
                    .enumerate()
                    .map(|(i, role)| {
                        let animation = if i % 2 == 0 {
                            AnimationKind::SlideLeft
                        } else {
                            AnimationKind::SlideRight
                        };
                        view! {
                            <li class="ml-6">
                                <span class="absolute -left-1.5 mt-2 h-3 w-3 rounded-full bg-neon-cyan shadow-neon"></span>
                                <AnimatedSection animation delay=100>
                                    <p class="text-sm text-neon-yellow">{role.period}</p>
                                    <h3 class="text-lg font-bold">
                                        {role.title}
                                        <span class="text-foreground/60">" @ "</span>
                                        <span class="text-neon-cyan">{role.company}</span>
                                    </h3>
                                    <ul class="mt-2 text-sm space-y-1 list-none">
                                        {role
                                            .highlights
                                            .iter()
                                            .map(|h| {
                                                view! {
                                                    <li>
                                                        <span class="text-neon-pink">"> "</span>
                                                        {*h}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </AnimatedSection>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

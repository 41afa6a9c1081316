use leptos::prelude::*;

use super::lazy::LazyImage;
use super::reveal::AnimatedSection;
use crate::motion::AnimationKind;

struct Project {
    name: &'static str,
    summary: &'static str,
    image: &'static str,
    tags: &'static [&'static str],
    link: Option<&'static str>,
}

const THUMB_WIDTH: u32 = 640;
const THUMB_HEIGHT: u32 = 360;

const PROJECTS: [Project; 4] = [
    Project {
        name: "Askdocs",
        summary: "Retrieval-augmented Q&A over internal wikis. Chunking, hybrid search and citation checking, answering in under two seconds.",
        image: "/images/projects/askdocs.webp",
        tags: &["RAG", "Rust", "pgvector"],
        link: Some("https://github.com/kaimoreno/askdocs"),
    },
    Project {
        name: "Tinyvoice",
        summary: "On-device speech commands with a quantised model small enough for a microcontroller.",
        image: "/images/projects/tinyvoice.webp",
        tags: &["TinyML", "C", "ONNX"],
        link: Some("https://github.com/kaimoreno/tinyvoice"),
    },
    Project {
        name: "Shelfscan",
        summary: "Vision pipeline that reads retail shelves and flags gaps for restocking.",
        image: "/images/projects/shelfscan.webp",
        tags: &["Computer Vision", "Python", "Triton"],
        link: None,
    },
    Project {
        name: "Evalboard",
        summary: "Regression dashboard for LLM prompts: golden sets, pairwise judging, and cost tracking per release.",
        image: "/images/projects/evalboard.webp",
        tags: &["LLM", "Leptos", "SQLite"],
        link: Some("https://github.com/kaimoreno/evalboard"),
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="py-16">
            <AnimatedSection animation=AnimationKind::SlideUp>
                <h2 class="text-2xl font-bold mb-10">
                    <span class="text-neon-pink">"03. "</span>
                    "AI Projects"
                </h2>
            </AnimatedSection>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        let delay = (i as u32 % 2) * 150;
                        view! {
                            <AnimatedSection
                                animation=AnimationKind::ScaleIn
                                delay
                                class="rounded-lg border border-cyan-500/30 bg-black/40 overflow-hidden hover:shadow-neon transition-shadow duration-300"
                            >
                                <LazyImage
                                    src=project.image
                                    alt=format!("Screenshot of {}", project.name)
                                    width=THUMB_WIDTH
                                    height=THUMB_HEIGHT
                                />
                                <div class="p-5">
                                    <h3 class="text-lg font-bold text-neon-cyan mb-2">
                                        {project.name}
                                    </h3>
                                    <p class="text-sm leading-relaxed mb-4">{project.summary}</p>
                                    <div class="flex flex-wrap gap-2 mb-3">
                                        {project
                                            .tags
                                            .iter()
                                            .map(|t| {
                                                view! {
                                                    <span class="rounded-md px-2 py-1 bg-pink-500/10 text-neon-pink text-xs">
                                                        {*t}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    {project
                                        .link
                                        .map(|href| {
                                            view! {
                                                <a
                                                    href=href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="text-sm text-neon-yellow hover:underline"
                                                >
                                                    "source ->"
                                                </a>
                                            }
                                        })}
                                </div>
                            </AnimatedSection>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

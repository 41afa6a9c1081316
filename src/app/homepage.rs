use leptos::prelude::*;
use leptos_meta::Title;

use super::career::Career;
use super::contact::Contact;
use super::lazy::LazySection;
use super::projects::Projects;
use super::reveal::AnimatedSection;
use super::skills::Skills;
use crate::motion::AnimationKind;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div id="top" class="w-full pt-24">
            <Hero />
            <About />
            <LazySection id="career" min_height="900px">
                <Career />
            </LazySection>
            <LazySection id="projects" min_height="1200px">
                <Projects />
            </LazySection>
            <LazySection id="skills" min_height="640px">
                <Skills />
            </LazySection>
            <LazySection id="contact" min_height="420px" load_ahead=2.0>
                <Contact />
            </LazySection>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-[80vh] flex flex-col justify-center items-start gap-6">
            <AnimatedSection animation=AnimationKind::FadeIn>
                <p class="text-neon-pink text-sm tracking-widest uppercase">"> booting portfolio.exe"</p>
            </AnimatedSection>
            <AnimatedSection animation=AnimationKind::SlideUp delay=150>
                <h1 class="text-4xl sm:text-6xl font-bold neon-text text-neon-cyan">"Kai Moreno"</h1>
            </AnimatedSection>
            <AnimatedSection animation=AnimationKind::SlideUp delay=300>
                <p class="text-xl sm:text-2xl text-foreground/90 max-w-2xl">
                    "Engineer building "
                    <span class="text-neon-yellow">"applied AI systems"</span>
                    " that survive contact with production."
                </p>
            </AnimatedSection>
            <AnimatedSection animation=AnimationKind::ScaleIn delay=450>
                <div class="flex flex-wrap gap-4 mt-4">
                    <a
                        href="#projects"
                        class="px-6 py-3 rounded-md border border-neon-cyan text-neon-cyan hover:bg-cyan-500/10 shadow-neon transition-all duration-200"
                    >
                        "view projects"
                    </a>
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-md border border-neon-pink text-neon-pink hover:bg-pink-500/10 transition-all duration-200"
                    >
                        "get in touch"
                    </a>
                </div>
            </AnimatedSection>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-16 scroll-mt-20">
            <AnimatedSection animation=AnimationKind::SlideUp>
                <h2 class="text-2xl font-bold mb-8">
                    <span class="text-neon-pink">"01. "</span>
                    "About"
                </h2>
            </AnimatedSection>
            <div class="flex flex-col lg:flex-row gap-8 lg:gap-12">
                <AnimatedSection animation=AnimationKind::SlideLeft class="w-full lg:max-w-2xl">
                    <p class="text-base mb-4 leading-relaxed">
                        "I design and ship machine-learning products end to end: data pipelines, model serving, and the interfaces people actually touch. Most of my recent work sits where "
                        <strong>"retrieval, ranking and language models"</strong>
                        " meet latency budgets."
                    </p>
                    <p class="text-base mb-4 leading-relaxed">
                        "Before that I spent years on backend infrastructure, which is why I still care more about p99 than about leaderboard scores."
                    </p>
                </AnimatedSection>
                <AnimatedSection
                    animation=AnimationKind::SlideRight
                    delay=150
                    class="w-full lg:max-w-md"
                >
                    <div class="bg-black/40 p-4 rounded-md border-l-4 border-neon-yellow">
                        <p class="text-sm text-neon-yellow mb-2 font-medium">"$ cat now.txt"</p>
                        <ul class="text-sm space-y-1">
                            <li>"Evaluating small models for on-device assistants"</li>
                            <li>"Writing more Rust than is strictly necessary"</li>
                            <li>"Mentoring two junior ML engineers"</li>
                        </ul>
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

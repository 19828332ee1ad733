/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::components::CTAButton::{ArrowButton, ButtonVariant, CTAButton};
use crate::components::GradientBadge::GradientBadge;
use crate::components::SceneEmbed::SceneEmbed;
use crate::components::Stat::Stat;
use crate::content::Stat as StatEntry;
use leptos::*;

#[component]
pub fn NavBar(#[prop(into)] brand: String) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 backdrop-blur-xl bg-[#06070c]/60 border-b border-white/5">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                // Logo
                <a href="#" class="flex items-center gap-3">
                    <div class="h-8 w-8 rounded-lg bg-gradient-to-br from-purple-500 via-fuchsia-500 to-amber-500"></div>
                    <span class="text-white font-semibold tracking-wide">{brand}</span>
                </a>

                <nav class="hidden md:flex items-center gap-6 text-sm text-white/70">
                    <NavLink href="#features" text="Features"/>
                    <NavLink href="#pricing" text="Pricing"/>
                    <NavLink href="#contact" text="Contact"/>
                </nav>

                <div class="flex items-center gap-3">
                    <CTAButton variant=ButtonVariant::Ghost>"Sign in"</CTAButton>
                    <CTAButton shake=true class="hidden sm:inline-flex">
                        "Get started"
                    </CTAButton>
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavLink(href: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <a href=href class="hover:text-white transition-colors">
            {text}
        </a>
    }
}

#[component]
pub fn HeroHeader(#[prop(into)] scene_url: String, stats: Vec<StatEntry>) -> impl IntoView {
    view! {
        <section class="relative overflow-hidden">
            // Soft gradient glow
            <div class="pointer-events-none absolute inset-0">
                <div class="absolute -top-24 left-1/2 -translate-x-1/2 h-[60rem] w-[60rem] rounded-full bg-gradient-conic from-purple-500/15 via-sky-500/10 to-amber-500/15 blur-3xl"></div>
            </div>

            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 grid lg:grid-cols-2 gap-8 py-20 md:py-28 items-center">
                <div class="relative z-10">
                    <GradientBadge>"Digital AI Product"</GradientBadge>
                    <h1 class="mt-5 text-4xl md:text-6xl font-extrabold leading-tight">
                        "Sell AI experiences that feel alive"
                    </h1>
                    <p class="mt-4 text-base md:text-lg text-white/70 max-w-xl">
                        "Launch your AI voice and chat agents with a stunning, high-converting storefront. Beautiful motion, crisp UX, and instant checkout, all in one."
                    </p>
                    <div class="mt-8 flex flex-wrap items-center gap-3">
                        <ArrowButton text="Start free"/>
                        <CTAButton variant=ButtonVariant::Ghost>"Live demo"</CTAButton>
                    </div>

                    <div class="mt-10 grid grid-cols-3 gap-6">
                        {stats
                            .into_iter()
                            .map(|stat| view! { <Stat value=stat.value label=stat.label/> })
                            .collect_view()}
                    </div>
                </div>

                <div class="relative h-[420px] md:h-[520px] lg:h-[600px] rounded-3xl overflow-hidden ring-1 ring-white/10 bg-white/5">
                    <SceneEmbed scene_url/>
                </div>
            </div>
        </section>
    }
}

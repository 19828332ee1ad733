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

use crate::content::Feature;
use crate::icons::{Icon, IconGlyph};
use leptos::*;

#[component]
pub fn FeatureCard(
    icon: Icon,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <article class="feature-card group relative rounded-2xl p-6 backdrop-blur-xl bg-white/5 ring-1 ring-white/10 hover:ring-white/20 transition-all duration-300 hover:translate-y-[-2px] hover:shadow-2xl hover:shadow-purple-500/10">
            // hover glow, CSS only
            <div class="absolute inset-0 -z-0 rounded-2xl opacity-0 group-hover:opacity-100 transition-opacity duration-300 bg-gradient-to-tr from-purple-500/10 via-sky-500/10 to-amber-500/10"></div>
            <div class="flex items-center justify-center h-12 w-12 rounded-xl bg-gradient-to-br from-purple-500/20 via-fuchsia-500/20 to-amber-500/20 text-white ring-1 ring-white/20">
                <IconGlyph icon=icon class="h-6 w-6"/>
            </div>
            <h3 class="mt-4 text-lg font-bold text-white">{title}</h3>
            <p class="mt-2 text-sm leading-relaxed text-white/70">{description}</p>
        </article>
    }
}

#[component]
pub fn FeatureGrid(features: Vec<Feature>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-6">
            {features
                .into_iter()
                .map(|feature| {
                    view! {
                        <FeatureCard
                            icon=feature.icon
                            title=feature.title
                            description=feature.description
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

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

use crate::components::CTAButton::ArrowButton;
use crate::components::GradientBadge::GradientBadge;
use crate::content::Plan;
use crate::icons::{Icon, IconGlyph};
use crate::tilt::Tilt;
use leptos::*;

#[component]
pub fn PricingSection(plans: Vec<Plan>) -> impl IntoView {
    view! {
        <section id="pricing" class="py-16 md:py-24">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="text-center max-w-2xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-extrabold">
                        "Simple, transparent pricing"
                    </h2>
                    <p class="mt-3 text-white/70">"Pay as you grow. Cancel anytime."</p>
                </div>

                <div class="mt-10 grid md:grid-cols-3 gap-6">
                    {plans
                        .into_iter()
                        .map(|plan| view! { <PricingCard plan/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn PricingCard(plan: Plan) -> impl IntoView {
    let Plan {
        name,
        price,
        features,
        highlight,
    } = plan;

    view! {
        <TiltCard highlight>
            {highlight
                .then(|| {
                    view! {
                        <div class="pricing-ribbon absolute -top-3 right-4">
                            <GradientBadge>"Most Popular"</GradientBadge>
                        </div>
                    }
                })}

            <h4 class="text-white font-semibold text-lg">{name}</h4>
            <div class="mt-2 flex items-end gap-1">
                <span class="text-4xl font-extrabold bg-clip-text text-transparent bg-gradient-to-r from-purple-400 to-amber-300">
                    {price}
                </span>
                <span class="text-white/60">"/mo"</span>
            </div>

            <ul class="mt-6 space-y-3">
                {features
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-start gap-2 text-sm text-white/80">
                                <span class="mt-0.5 inline-flex h-5 w-5 items-center justify-center rounded-full bg-gradient-to-br from-purple-500/30 to-amber-500/30 text-emerald-300 ring-1 ring-white/15">
                                    <IconGlyph icon=Icon::Check class="h-3.5 w-3.5"/>
                                </span>
                                {feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <ArrowButton text="Get Started" class="mt-6 w-full justify-center"/>
        </TiltCard>
    }
}

/// Interactive surface of a pricing card.
///
/// Each instance owns its own tilt; the pointer handlers rewrite it from
/// the current sample only and reset it when the pointer leaves.
#[island]
fn TiltCard(highlight: bool, children: Children) -> impl IntoView {
    let ring_class = if highlight {
        "ring-amber-400/60"
    } else {
        "ring-white/10"
    };
    let class = format!(
        "pricing-card group relative rounded-2xl p-6 backdrop-blur-xl bg-white/5 ring-1 {ring_class} hover:ring-white/20 transition-all duration-300 hover:-translate-y-1 hover:shadow-2xl hover:shadow-purple-500/10"
    );

    let tilt = create_rw_signal(Tilt::NEUTRAL);
    let card = create_node_ref::<html::Div>();

    let on_pointer_move = move |ev: ev::MouseEvent| {
        let Some(card) = card.get_untracked() else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        let x = f64::from(ev.client_x()) - rect.left();
        let y = f64::from(ev.client_y()) - rect.top();
        tilt.set(Tilt::from_pointer(x, y, rect.width(), rect.height()));
    };

    view! {
        <div
            node_ref=card
            class=class
            style=move || tilt.get().style()
            on:mousemove=on_pointer_move
            on:mouseleave=move |_| tilt.set(Tilt::NEUTRAL)
        >
            {children()}
        </div>
    }
}

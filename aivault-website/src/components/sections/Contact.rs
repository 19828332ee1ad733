use crate::components::CTAButton::{ButtonVariant, CTAButton};
use leptos::*;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-16 md:py-24">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="relative overflow-hidden rounded-3xl p-8 md:p-12 ring-1 ring-white/10 bg-gradient-to-br from-purple-600/20 via-fuchsia-600/20 to-amber-500/20">
                    <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                        <div class="absolute -top-20 -right-16 h-64 w-64 rounded-full bg-purple-400/20 blur-3xl"></div>
                        <div class="absolute -bottom-16 -left-10 h-64 w-64 rounded-full bg-amber-400/20 blur-3xl"></div>
                    </div>
                    <div class="relative z-10 grid lg:grid-cols-2 gap-6 items-center">
                        <div>
                            <h3 class="text-2xl md:text-3xl font-extrabold">
                                "Ready to launch your AI product?"
                            </h3>
                            <p class="mt-2 text-white/70">
                                "Get a beautiful storefront with animations, hover effects, and a micro-interaction shake that drives clicks."
                            </p>
                        </div>
                        <div class="flex flex-wrap items-center gap-3 lg:justify-end">
                            <CTAButton shake=true>"Create my store"</CTAButton>
                            <CTAButton variant=ButtonVariant::Ghost>"Talk to sales"</CTAButton>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

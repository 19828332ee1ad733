use crate::components::FeatureCard::FeatureGrid;
use crate::content::Feature;
use leptos::*;

#[component]
pub fn FeaturesSection(features: Vec<Feature>) -> impl IntoView {
    view! {
        <section id="features" class="py-16 md:py-24">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <FeatureGrid features/>
            </div>
        </section>
    }
}

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

use crate::components::sections::Contact::ContactSection;
use crate::components::sections::Features::FeaturesSection;
use crate::components::sections::Pricing::PricingSection;
use crate::components::HeroHeader::HeroHeader;
use crate::components::Page::*;
use crate::content::SiteContent;
use leptos::*;
use leptos_meta::*;

/// The storefront: nav, hero, features, pricing, contact banner, footer.
///
/// Content is injected rather than built here, so any data set renders
/// through the same layout.
#[component]
pub fn LandingPage(content: SiteContent) -> impl IntoView {
    let SiteContent {
        brand,
        scene_url,
        features,
        plans,
        stats,
    } = content;

    view! {
        <Title text="Home"/>
        <Page brand>
            <HeroHeader scene_url stats/>
            <FeaturesSection features/>
            <PricingSection plans/>
            <ContactSection/>
        </Page>
    }
}

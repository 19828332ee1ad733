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

use crate::content::SiteContent;
use crate::pages::Landing::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use serde_json::json;

const DESCRIPTION: &str = "Launch AI voice and chat agents with a high-converting storefront. Beautiful motion, crisp UX, and instant checkout.";

/// JSON-LD `Product` document with one offer per plan, in plan order.
///
/// `</` is escaped so injected content cannot close the surrounding `<script>`.
pub fn structured_data(content: &SiteContent) -> String {
    let offers: Vec<_> = content
        .plans
        .iter()
        .map(|plan| {
            json!({
                "@type": "Offer",
                "name": plan.name,
                "price": plan.price_amount(),
                "priceCurrency": "USD",
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": content.brand,
        "description": DESCRIPTION,
        "offers": offers,
    })
    .to_string()
    .replace("</", "<\\/")
}

#[component]
pub fn App(content: SiteContent) -> impl IntoView {
    let brand = content.brand.clone();
    let formatter = move |text: String| format!("{text} - {brand}");
    provide_meta_context();

    let json_ld = structured_data(&content);
    let site_name = content.brand.clone();
    let og_title = format!("{site_name} - Sell AI experiences that feel alive");

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/aivault_website.css"/>
        <Title formatter/>
        <Meta name="description" content=DESCRIPTION/>
        <Meta
            name="keywords"
            content="ai storefront, ai voice agents, ai chat agents, digital ai product, ai pricing"
        />

        // Open Graph / Facebook
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content=site_name/>
        <Meta property="og:title" content=og_title.clone()/>
        <Meta property="og:description" content=DESCRIPTION/>

        // Twitter
        <Meta property="twitter:card" content="summary_large_image"/>
        <Meta property="twitter:title" content=og_title/>
        <Meta property="twitter:description" content=DESCRIPTION/>

        <Router>
            <Routes>
                <Route
                    path=""
                    view=move || view! { <LandingPage content=content.clone()/> }
                />
            </Routes>
        </Router>
        <script type="application/ld+json" inner_html=json_ld></script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Plan;

    #[test]
    fn offers_follow_plan_order() {
        let data: serde_json::Value =
            serde_json::from_str(&structured_data(&SiteContent::default())).unwrap();
        let names: Vec<_> = data["offers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|offer| offer["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Starter", "Pro", "Scale"]);
        assert_eq!(data["offers"][1]["price"], "49");
        assert_eq!(data["name"], "AIVault");
    }

    #[test]
    fn offers_track_injected_plans() {
        let content = SiteContent {
            plans: vec![Plan::new("Solo", "$5", ["One seat"])],
            ..SiteContent::default()
        };
        let data: serde_json::Value = serde_json::from_str(&structured_data(&content)).unwrap();
        assert_eq!(data["offers"].as_array().map(Vec::len), Some(1));
        assert_eq!(data["offers"][0]["priceCurrency"], "USD");
    }

    #[test]
    fn markup_in_content_cannot_close_the_script() {
        let content = SiteContent {
            brand: "Vault</script><script>alert(1)</script>".to_string(),
            plans: vec![Plan::new("</script>", "$5", ["One seat"])],
            ..SiteContent::default()
        };
        let json_ld = structured_data(&content);
        assert!(!json_ld.contains("</"), "unescaped close tag in {json_ld}");

        let data: serde_json::Value = serde_json::from_str(&json_ld).unwrap();
        assert_eq!(data["name"], "Vault</script><script>alert(1)</script>");
        assert_eq!(data["offers"][0]["name"], "</script>");
    }
}

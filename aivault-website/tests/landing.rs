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

// Server-side render tests for the landing page.
//
// Rather than diffing whole documents, these render real components to
// HTML and look for landmarks: one card per content entry, in order, and
// the ribbon only where a plan asks for it.

#![cfg(feature = "ssr")]

use aivault_website::app::App;
use aivault_website::components::sections::Pricing::PricingSection;
use aivault_website::components::Footer::Footer;
use aivault_website::content::{Feature, Plan, SiteContent, Stat};
use aivault_website::fallback::file_and_error_handler;
use aivault_website::icons::Icon;
use aivault_website::pages::Landing::LandingPage;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, Uri};
use chrono::Datelike;
use leptos::*;
use leptos_meta::{provide_meta_context, use_head};
use leptos_router::{RouterIntegrationContext, ServerIntegration};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn render_landing(content: SiteContent) -> String {
    leptos::ssr::render_to_string(move || {
        provide_meta_context();
        view! { <LandingPage content/> }
    })
    .to_string()
}

/// Renders the whole document shell at `/`, returning the `<head>` tags and the body.
fn render_app(content: SiteContent) -> (String, String) {
    let runtime = create_runtime();
    provide_meta_context();
    provide_context(RouterIntegrationContext::new(ServerIntegration {
        path: "http://localhost/".to_string(),
    }));

    let body = view! { <App content/> }.into_view().render_to_string().to_string();
    let head = use_head().dehydrate();

    runtime.dispose();
    (head, body)
}

/// Chunks of markup that each start at one card's root class.
fn cards<'a>(html: &'a str, marker: &str) -> Vec<&'a str> {
    html.split(marker).skip(1).collect()
}

fn synthetic_content() -> SiteContent {
    SiteContent {
        brand: "TestVault".to_string(),
        scene_url: "https://example.com/scene.splinecode".to_string(),
        features: vec![
            Feature::new(Icon::Zap, "Alpha feature", "first"),
            Feature::new(Icon::Shield, "Bravo feature", "second"),
            Feature::new(Icon::Sparkles, "Charlie feature", "third"),
            Feature::new(Icon::Check, "Delta feature", "fourth"),
        ],
        plans: vec![
            Plan::new("Basic", "$1", ["One seat"]),
            Plan::new("Plus", "$2", ["Two seats"]),
            Plan::new("Max", "$3", ["All the seats"]).highlighted(),
        ],
        stats: vec![Stat::new("42", "Answers")],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn default_storefront_renders_three_features_three_plans_one_ribbon() {
    let html = render_landing(SiteContent::default());

    assert_eq!(html.matches("feature-card").count(), 3);
    assert_eq!(html.matches("pricing-card").count(), 3);
    assert_eq!(html.matches("pricing-ribbon").count(), 1);

    let plans = cards(&html, "pricing-card");
    assert!(plans[0].contains("Starter") && !plans[0].contains("Most Popular"));
    assert!(plans[1].contains("$49") && plans[1].contains("Most Popular"));
    assert!(plans[2].contains("Scale") && !plans[2].contains("Most Popular"));
}

#[test]
fn sections_render_in_fixed_order() {
    let html = render_landing(SiteContent::default());

    let landmarks = [
        "<header",
        "Sell AI experiences that feel alive",
        "id=\"features\"",
        "id=\"pricing\"",
        "id=\"contact\"",
        "<footer",
    ];
    let positions: Vec<usize> = landmarks
        .iter()
        .map(|landmark| {
            html.find(landmark)
                .unwrap_or_else(|| panic!("{landmark} missing"))
        })
        .collect();
    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "sections out of order: {positions:?}"
    );
}

#[test]
fn feature_cards_follow_collection_order() {
    let html = render_landing(synthetic_content());
    let features = cards(&html, "feature-card");

    assert_eq!(features.len(), 4);
    for (card, title) in features
        .iter()
        .zip(["Alpha", "Bravo", "Charlie", "Delta"])
    {
        assert!(card.contains(title), "expected {title} in its own card");
    }
}

#[test]
fn ribbon_only_on_highlighted_plans() {
    let html = render_landing(synthetic_content());
    let plans = cards(&html, "pricing-card");

    assert_eq!(plans.len(), 3);
    for (card, (name, highlighted)) in plans
        .iter()
        .zip([("Basic", false), ("Plus", false), ("Max", true)])
    {
        assert!(card.contains(name), "expected {name} in its own card");
        assert_eq!(card.contains("Most Popular"), highlighted, "ribbon on {name}");
    }
}

#[test]
fn no_ribbon_without_highlight() {
    let plans = vec![
        Plan::new("Basic", "$1", ["One seat"]),
        Plan::new("Plus", "$2", ["Two seats"]),
    ];
    let html = leptos::ssr::render_to_string(move || view! { <PricingSection plans/> }).to_string();

    assert_eq!(html.matches("pricing-card").count(), 2);
    assert!(!html.contains("Most Popular"));
}

#[test]
fn cards_start_untilted() {
    let html = render_landing(SiteContent::default());
    assert_eq!(html.matches("--mx: 0deg; --my: 0deg;").count(), 3);
    assert!(html.contains("perspective(900px) rotateX(var(--my)) rotateY(var(--mx))"));
}

#[test]
fn injected_content_replaces_defaults() {
    let html = render_landing(synthetic_content());

    assert!(html.contains("TestVault"));
    assert!(html.contains("https://example.com/scene.splinecode"));
    assert!(html.contains("Answers"));
    assert!(!html.contains("AIVault"));
    assert!(!html.contains("Blazing-fast responses"));
}

#[test]
fn hero_embeds_scene_and_stats() {
    let html = render_landing(SiteContent::default());

    assert!(html.contains("spline-viewer"));
    assert!(html.contains("https://prod.spline.design/4cHQr84zOGAHOehh/scene.splinecode"));
    assert_eq!(html.matches("class=\"stat text-center\"").count(), 3);
    assert!(html.contains("99.9%"));
}

#[test]
fn footer_shows_current_year() {
    let year = chrono::Local::now().year();
    let html = leptos::ssr::render_to_string(|| view! { <Footer brand="AIVault"/> }).to_string();

    assert!(
        html.contains(&format!("© {year} AIVault. All rights reserved.")),
        "footer was: {html}"
    );
}

#[test]
fn app_shell_routes_root_to_the_landing_page() {
    let (head, body) = render_app(SiteContent::default());

    assert!(head.contains("<title>Home - AIVault</title>"), "head was: {head}");
    assert!(head.contains("og:title"));
    assert!(head.contains("twitter:card"));
    assert!(head.contains("AIVault - Sell AI experiences that feel alive"));

    assert_eq!(body.matches("pricing-card").count(), 3);
    assert!(body.contains("id=\"features\""));
    assert!(body.contains("application/ld+json"));
    assert!(body.contains("\"priceCurrency\":\"USD\""));
}

#[test]
fn app_shell_uses_injected_brand() {
    let (head, body) = render_app(synthetic_content());

    assert!(head.contains("<title>Home - TestVault</title>"), "head was: {head}");
    assert!(body.contains("\"name\":\"Max\""));
    assert!(!body.contains("Blazing-fast responses"));
}

#[tokio::test]
async fn unknown_path_falls_back_to_not_found() {
    let options = LeptosOptions::builder()
        .output_name("aivault_website")
        .site_root("target/no-such-site")
        .build();
    let uri: Uri = "/nope".parse().unwrap();
    let req = Request::builder()
        .uri(uri.clone())
        .body(Body::empty())
        .unwrap();

    let res = file_and_error_handler(uri, State(options), req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

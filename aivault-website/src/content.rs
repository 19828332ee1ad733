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

//! Static page content.
//!
//! The landing page never builds these itself; a [`SiteContent`] is handed
//! to the composition root so tests can render synthetic data sets.

use crate::icons::Icon;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCENE_URL: &str = "https://prod.spline.design/4cHQr84zOGAHOehh/scene.splinecode";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(icon: Icon, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Display key; unique within a collection.
    pub name: String,
    /// Pre-formatted, e.g. `$49`.
    pub price: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub highlight: bool,
}

impl Plan {
    pub fn new<I, S>(name: impl Into<String>, price: impl Into<String>, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            price: price.into(),
            features: features.into_iter().map(Into::into).collect(),
            highlight: false,
        }
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }

    /// Price without its currency symbol or separators, as structured data expects.
    pub fn price_amount(&self) -> String {
        self.price
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: String,
    pub scene_url: String,
    pub features: Vec<Feature>,
    pub plans: Vec<Plan>,
    pub stats: Vec<Stat>,
}

impl SiteContent {
    pub fn highlighted_plan(&self) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.highlight)
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "AIVault".to_string(),
            scene_url: DEFAULT_SCENE_URL.to_string(),
            features: default_features(),
            plans: default_plans(),
            stats: default_stats(),
        }
    }
}

pub fn default_features() -> Vec<Feature> {
    vec![
        Feature::new(
            Icon::Zap,
            "Blazing-fast responses",
            "Sub-200ms generation powered by optimized AI pipelines and smart caching.",
        ),
        Feature::new(
            Icon::Shield,
            "Enterprise-grade security",
            "SOC2-ready privacy, isolated data, and role-based controls by default.",
        ),
        Feature::new(
            Icon::Sparkles,
            "Delightful voice & chat",
            "Natural conversations, neural voices, and multimodal understanding.",
        ),
    ]
}

pub fn default_plans() -> Vec<Plan> {
    vec![
        Plan::new(
            "Starter",
            "$19",
            ["5,000 requests included", "1 voice + chat channel", "Email support"],
        ),
        Plan::new(
            "Pro",
            "$49",
            ["50,000 requests included", "Custom voices & styles", "Priority support"],
        )
        .highlighted(),
        Plan::new(
            "Scale",
            "$99",
            ["Unlimited requests", "Dedicated cluster", "SLA + SSO + Audit logs"],
        ),
    ]
}

pub fn default_stats() -> Vec<Stat> {
    vec![
        Stat::new("200K+", "Sessions served"),
        Stat::new("99.9%", "Uptime"),
        Stat::new("<200ms", "Latency"),
    ]
}

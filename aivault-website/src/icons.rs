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

use leptos::*;
use serde::{Deserialize, Serialize};

/// Named glyphs used across the page. Paths follow the 24x24 stroke grid of
/// the Lucide icon set, so any set with the same names can be swapped in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Sparkles,
    Shield,
    Zap,
    ArrowRight,
    Check,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Sparkles => "sparkles",
            Icon::Shield => "shield",
            Icon::Zap => "zap",
            Icon::ArrowRight => "arrow-right",
            Icon::Check => "check",
        }
    }

    fn paths(&self) -> &'static str {
        match self {
            Icon::Sparkles => concat!(
                r#"<path d="M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z"/>"#,
                r#"<path d="M20 3v4"/><path d="M22 5h-4"/><path d="M4 17v2"/><path d="M5 18H3"/>"#,
            ),
            Icon::Shield => {
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#
            }
            Icon::Zap => {
                r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#
            }
            Icon::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Icon::Check => r#"<path d="M20 6 9 17l-5-5"/>"#,
        }
    }

    /// Full `<svg>` markup for this glyph, with `class` on the root element.
    pub fn markup(&self, class: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="{class}" data-icon="{}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            self.name(),
            self.paths()
        )
    }
}

#[component]
pub fn IconGlyph(icon: Icon, #[prop(default = "h-4 w-4")] class: &'static str) -> impl IntoView {
    view! { <span class="inline-flex shrink-0" inner_html=icon.markup(class)></span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_carries_class_and_name() {
        let svg = Icon::ArrowRight.markup("h-4 w-4");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"class="h-4 w-4""#));
        assert!(svg.contains(r#"data-icon="arrow-right""#));
    }

    #[test]
    fn every_icon_has_paths() {
        for icon in [Icon::Sparkles, Icon::Shield, Icon::Zap, Icon::ArrowRight, Icon::Check] {
            assert!(icon.markup("").contains("<path"), "{icon:?} has no glyph");
        }
    }
}

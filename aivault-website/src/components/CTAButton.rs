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

use crate::icons::{Icon, IconGlyph};
use leptos::*;

/// Storefront button variants
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Gradient fill, the main conversion action.
    Primary,
    /// Translucent outline for secondary actions.
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// A storefront button. Without an `href` it renders an inert `<button>`.
#[component]
pub fn CTAButton(
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    /// Adds the hover shake micro-interaction.
    #[prop(default = false)]
    shake: bool,
    #[prop(default = String::new(), into)] class: String,
    #[prop(default = None)] href: Option<String>,
) -> impl IntoView {
    let shake_class = if shake { "btn-shake" } else { "" };
    let combined_class = format!("{} {} {}", variant.class(), shake_class, class);

    let content = children();

    match href {
        Some(href) => view! {
            <a href=href class=combined_class>
                {content}
            </a>
        }
        .into_view(),
        None => view! {
            <button type="button" class=combined_class>
                {content}
            </button>
        }
        .into_view(),
    }
}

/// Button with a trailing arrow, used for the "start" style actions.
#[component]
pub fn ArrowButton(
    #[prop(into)] text: String,
    #[prop(default = String::new(), into)] class: String,
) -> impl IntoView {
    view! {
        <CTAButton
            shake=true
            class=format!("inline-flex items-center gap-2 {class}")
        >
            {text}
            <IconGlyph icon=Icon::ArrowRight class="h-4 w-4"/>
        </CTAButton>
    }
}

use crate::icons::{Icon, IconGlyph};
use leptos::*;

#[component]
pub fn GradientBadge(children: Children) -> impl IntoView {
    view! {
        <span class="gradient-badge inline-flex items-center gap-2 rounded-full px-3 py-1 text-xs font-semibold tracking-wide text-white bg-gradient-to-r from-purple-500 via-fuchsia-500 to-amber-500 shadow-md shadow-fuchsia-500/30">
            <IconGlyph icon=Icon::Sparkles class="h-3.5 w-3.5"/>
            {children()}
        </span>
    }
}

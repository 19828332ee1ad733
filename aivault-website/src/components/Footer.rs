use chrono::Datelike;
use leptos::*;

/// Calendar year at render time, in the renderer's local timezone.
pub fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

#[component]
pub fn Footer(#[prop(into)] brand: String) -> impl IntoView {
    let year = copyright_year();

    view! {
        <footer class="border-t border-white/5 py-10">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-white/60">
                <p class="copyright">{format!("© {year} {brand}. All rights reserved.")}</p>
                <div class="flex items-center gap-6">
                    <FooterLink text="Privacy"/>
                    <FooterLink text="Terms"/>
                    <FooterLink text="Status"/>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterLink(text: &'static str) -> impl IntoView {
    view! {
        <a href="#" class="hover:text-white transition-colors">
            {text}
        </a>
    }
}

use crate::components::Footer::*;
use crate::components::HeroHeader::NavBar;
use leptos::*;

/// Dark storefront shell: sticky nav on top, footer at the bottom.
#[component]
pub fn Page(#[prop(into)] brand: String, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen w-full overflow-x-hidden bg-[#06070c] text-white selection:bg-purple-500/30 selection:text-white">
            <NavBar brand=brand.clone()/>
            {children()}
            <Footer brand/>
        </div>
    }
}

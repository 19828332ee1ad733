use leptos::*;

#[component]
pub fn Stat(#[prop(into)] value: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="stat text-center">
            <div class="text-3xl md:text-4xl font-extrabold bg-clip-text text-transparent bg-gradient-to-r from-purple-500 via-blue-500 to-amber-500">
                {value}
            </div>
            <div class="mt-1 text-sm text-white/70">{label}</div>
        </div>
    }
}

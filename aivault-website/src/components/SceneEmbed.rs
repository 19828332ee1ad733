use leptos::*;

/// ES module that registers the `<spline-viewer>` custom element.
pub const SPLINE_VIEWER_MODULE: &str =
    "https://unpkg.com/@splinetool/viewer@1.9.48/build/spline-viewer.js";

/// Embeds a third-party 3D scene that fills its container.
///
/// The viewer is opaque: it takes the scene URL and draws into its own
/// surface. If the scene fails to load the page still renders around it.
#[component]
pub fn SceneEmbed(#[prop(into)] scene_url: String) -> impl IntoView {
    view! {
        <script type="module" src=SPLINE_VIEWER_MODULE></script>
        <spline-viewer
            class="scene-embed block"
            url=scene_url
            style="width: 100%; height: 100%;"
        ></spline-viewer>
    }
}

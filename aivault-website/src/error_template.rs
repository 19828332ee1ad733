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

use crate::errors::SiteError;
use cfg_if::cfg_if;
use leptos::*;

#[cfg(feature = "ssr")]
use leptos_axum::ResponseOptions;

/// Renders the errors collected by an error boundary or handed in by the server fallback.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => create_rw_signal(e),
        None => match errors {
            Some(e) => e,
            None => create_rw_signal(Errors::default()),
        },
    };

    let errors: Vec<SiteError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_, v)| v.downcast_ref::<SiteError>().cloned())
        .collect();

    // only the first error's status reaches the client
    cfg_if! {
        if #[cfg(feature = "ssr")] {
            let response = use_context::<ResponseOptions>();
            if let Some(response) = response {
                if let Some(first) = errors.first() {
                    response.set_status(first.status_code());
                }
            }
        }
    }

    view! {
        <section class="min-h-screen w-full bg-[#06070c] text-white flex flex-col items-center justify-center gap-4 px-4">
            <h1 class="text-4xl font-extrabold">
                {if errors.len() > 1 { "Errors" } else { "Error" }}
            </h1>
            <For
                each=move || errors.clone().into_iter().enumerate()
                key=|(index, _)| *index
                children=move |(_, error)| {
                    let error_string = error.to_string();
                    let error_code = error.status_code();
                    view! {
                        <h2 class="text-2xl font-semibold">{error_code.to_string()}</h2>
                        <p class="text-white/70">"Error: " {error_string}</p>
                    }
                }
            />
            <a href="/" class="btn btn-ghost">"Back to the storefront"</a>
        </section>
    }
}

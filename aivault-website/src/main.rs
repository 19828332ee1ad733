use cfg_if::cfg_if;

// boilerplate to run in different modes
cfg_if! {
    if #[cfg(feature = "ssr")] {
        use std::error::Error;

        use leptos::*;
        use axum::{
            routing::post,
            Router,
        };
        use aivault_website::app::*;
        use aivault_website::content::SiteContent;
        use aivault_website::fallback::file_and_error_handler;
        use leptos_axum::{generate_route_list, LeptosRoutes};
        use log::LevelFilter;
        use simple_logger::SimpleLogger;
        use tower_http::compression::CompressionLayer;

        #[tokio::main]
        async fn main() -> Result<(), Box<dyn Error>> {
            // RUST_LOG overrides the default level
            SimpleLogger::new()
                .with_level(LevelFilter::Info)
                .env()
                .init()?;

            let conf = get_configuration(None).await?;
            let leptos_options = conf.leptos_options;
            let addr = leptos_options.site_addr;

            let content = SiteContent::default();
            let routes = {
                let content = content.clone();
                generate_route_list(move || view! { <App content=content.clone()/> })
            };

            // build our application with a route
            let app = Router::new()
                .route("/api/*fn_name", post(leptos_axum::handle_server_fns))
                .leptos_routes(&leptos_options, routes, move || {
                    view! { <App content=content.clone()/> }
                })
                .fallback(file_and_error_handler)
                .with_state(leptos_options)
                .layer(CompressionLayer::new());

            log::info!("listening on http://{}", &addr);
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await?;
            Ok(())
        }
    } else if #[cfg(feature = "csr")] {
        use leptos::*;
        use aivault_website::app::App;
        use aivault_website::content::SiteContent;

        // client-only build, served by trunk from index.html
        pub fn main() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Debug);
            log::debug!("mounting storefront");
            mount_to_body(|| view! { <App content=SiteContent::default()/> });
        }
    } else {
        pub fn main() {
            // see lib.rs for the islands hydration entry point
        }
    }
}

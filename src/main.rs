#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use std::io;

    use actix_files::Files;
    use actix_web::{web, HttpServer};
    use leptos::config::get_configuration;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    use codecraft::config::SiteConfig;
    use codecraft::frontend::{shell, App};
    use codecraft::services::lookup::{CancelToken, CourseLookup};

    dotenvy::dotenv().ok();
    let config = SiteConfig::from_env().map_err(io::Error::other)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = get_configuration(None).map_err(io::Error::other)?;
    let mut leptos_options = conf.leptos_options;
    if let Some(addr) = config.bind_addr {
        leptos_options.site_addr = addr;
    }
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let shutdown = CancelToken::new();
    let lookup = CourseLookup::from_config(&config, shutdown.clone());
    tracing::info!(%addr, lookup_delay_ms = lookup.delay().as_millis() as u64, "starting CodeCraft");

    let server = HttpServer::new(move || {
        let leptos_options = leptos_options.clone();
        let site_root = leptos_options.site_root.clone().to_string();
        let api_lookup = lookup.clone();
        let ssr_lookup = lookup.clone();

        actix_web::App::new()
            .route(
                "/api/{tail:.*}",
                handle_server_fns_with_context(move || provide_context(api_lookup.clone())),
            )
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes_with_context(routes.clone(), move || provide_context(ssr_lookup.clone()), {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options))
    })
    .bind(addr)?
    .disable_signals()
    .run();

    // In-flight lookups are abandoned as soon as shutdown starts.
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutting down");
            shutdown.cancel();
            handle.stop(true).await;
        }
    });

    server.await
}

#[cfg(not(feature = "ssr"))]
fn main() {}

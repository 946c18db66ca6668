#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use glass_portfolio::app::*;
    use glass_portfolio::contact::ContactConfig;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};

    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).unwrap();
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let contact = ContactConfig::from_env().unwrap();
    if !contact.is_configured() {
        tracing::warn!("CONTACT_WEBHOOK_URL is not set, contact form submissions will fail");
    }

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(contact.clone()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // the browser entry point is `hydrate` in lib.rs
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::Router;
    use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};
    use folio::app::*;
    use folio::config::Config;
    use folio::error::AppError;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use opentelemetry_configuration::OtelSdkBuilder;
    use tower_http::compression::CompressionLayer;

    let config = Config::load().map_err(AppError::from)?;

    let _guard = OtelSdkBuilder::new()
        .service_name(env!("CARGO_PKG_NAME"))
        .service_version(env!("CARGO_PKG_VERSION"))
        .resource_attribute("deployment.environment.name", config.otel.environment.clone())
        .resource_attribute("vcs.repository.name", env!("CARGO_PKG_NAME"))
        .resource_attribute("vcs.ref.head.revision", env!("VCS_REF_HEAD_REVISION"))
        .resource_attribute("vcs.ref.head.name", env!("VCS_REF_HEAD_NAME"))
        .resource_attribute("vcs.ref.head.type", "branch")
        .endpoint(config.otel.endpoint_or_default())
        .with_standard_env()
        .build()
        .map_err(|e| AppError::Telemetry(e.to_string()))?;

    tracing::debug!(?config, "configuration loaded");

    let conf = get_configuration(None).map_err(|e| AppError::Leptos(e.to_string()))?;
    let addr = config.listen.unwrap_or(conf.leptos_options.site_addr);
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(OtelInResponseLayer)
        .layer(OtelAxumLayer::default())
        .with_state(leptos_options);

    if let Some(socket_path) = &config.socket {
        tracing::info!("listening on unix socket {}", socket_path.display());
        let listener = tokio::net::UnixListener::bind(socket_path).map_err(AppError::from)?;
        axum::serve(listener, app.into_make_service())
            .await
            .map_err(AppError::from)?;
    } else {
        tracing::info!("listening on http://{}", &addr);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(AppError::from)?;
        axum::serve(listener, app.into_make_service())
            .await
            .map_err(AppError::from)?;
    }

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

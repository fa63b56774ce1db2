use stockdesk_service::InventoryService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockdesk_observability::init();

    let addr = std::env::var("STOCKDESK_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let seed_demo = std::env::var("STOCKDESK_SEED_DEMO")
        .map(|v| !matches!(v.as_str(), "false" | "0"))
        .unwrap_or(true);

    let service = if seed_demo {
        tracing::info!("starting with the demo dataset");
        InventoryService::with_demo_data()
    } else {
        tracing::info!("starting with an empty store");
        InventoryService::new()
    };

    let app = stockdesk_api::app::build_app(service);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

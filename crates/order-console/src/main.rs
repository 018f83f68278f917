use order_console::config::load_config;
use order_console::console::{ConsoleError, OrderConsole};
use order_console::lifecycle::{setup_tracing, CatalogSystem};
use order_console::model::{OrderStatus, OrderView};
use order_console::service::HttpCatalog;
use std::error::Error;
use std::sync::Arc;
use tracing::{error, info, Instrument};

fn log_board(views: &[OrderView]) {
    for view in views {
        info!(
            order_id = %view.order_id,
            customer = %view.customer_name,
            status = %view.status,
            total = view.total_amount,
            lines = view.items.len(),
            "Order"
        );
        for item in &view.items {
            info!(
                product = %item.product_name,
                quantity = item.quantity,
                subtotal = item.subtotal(),
                "  Line"
            );
        }
    }
}

/// Completes the first pending order, or cancels the first completed one.
async fn toggle_first(console: &OrderConsole) -> Result<(), ConsoleError> {
    let orders = console.orders();
    let Some(target) = orders
        .iter()
        .find(|view| view.status != OrderStatus::Cancelled)
    else {
        info!("No order to change");
        return Ok(());
    };
    let next = match target.status {
        OrderStatus::Pending => OrderStatus::Completed,
        _ => OrderStatus::Cancelled,
    };

    let change = console.change_status(&target.order_id, next).await?;
    info!(
        order_id = %change.order_id,
        previous = %change.previous,
        current = %change.current,
        reconciled = change.reconciled,
        "Status changed"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();
    let config = load_config();

    if let Some(catalog) = HttpCatalog::from_config(&config)? {
        info!(base_url = catalog.base_url(), "Using remote catalog");
        let console = OrderConsole::new(Arc::new(catalog))
            .refresh_after_mutation(config.refresh_after_mutation);

        let views = console.refresh().await?;
        log_board(&views);
        let stats = console.dashboard();
        info!(
            orders = stats.order_count,
            customers = stats.customer_count,
            products = stats.product_count,
            sales = stats.total_sales,
            "Dashboard"
        );
        return Ok(());
    }

    info!("Starting in-process catalog");
    let system = CatalogSystem::new(config.channel_buffer);
    system.seed_demo().await?;

    let console = OrderConsole::new(Arc::new(system.catalog()))
        .refresh_after_mutation(config.refresh_after_mutation);

    let views = console
        .refresh()
        .instrument(tracing::info_span!("initial_load"))
        .await?;
    log_board(&views);

    let stats = console.dashboard();
    info!(
        orders = stats.order_count,
        customers = stats.customer_count,
        products = stats.product_count,
        sales = stats.total_sales,
        recent = stats.recent_orders.len(),
        "Dashboard"
    );

    if let Err(e) = toggle_first(&console)
        .instrument(tracing::info_span!("status_change"))
        .await
    {
        error!(error = %e, "Status change failed");
    }
    log_board(&console.orders());

    drop(console);
    system.shutdown().await?;
    Ok(())
}

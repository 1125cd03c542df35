/*
[INPUT]:  DERIBIT_CLIENT_ID / DERIBIT_CLIENT_SECRET environment variables
[OUTPUT]: Order lifecycle round trips with latency statistics
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use std::sync::Arc;

use deribit_adapter::{Credentials, DeribitClient, MetricsCollector, OrderConfirmation};

/// Example: place, modify and cancel one order on the testnet
#[tokio::main]
async fn main() {
    println!("=== Deribit Trading Example ===\n");

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Skipping live run: {e}");
            eprintln!("Set DERIBIT_CLIENT_ID and DERIBIT_CLIENT_SECRET to run this example.");
            return;
        }
    };

    let metrics = Arc::new(MetricsCollector::new());
    metrics.set_detailed_logging(true);
    let client = DeribitClient::new(metrics.clone());

    if let Err(e) = client.connect().await {
        eprintln!("Failed to connect: {e}");
        return;
    }
    println!("✓ Connected to testnet");

    if let Err(e) = client.authenticate(&credentials).await {
        eprintln!("Authentication failed: {e}");
        client.disconnect().await;
        return;
    }
    println!("✓ Authenticated");

    match client.place_order("BTC-PERPETUAL", 10.0, 50000.0).await {
        Ok(response) => {
            let confirmation: OrderConfirmation = match response.result_as() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Unexpected confirmation shape: {e}");
                    client.disconnect().await;
                    return;
                }
            };
            let order_id = confirmation.order.order_id;
            println!("✓ Order placed: {order_id}");

            match client.modify_order(&order_id, 50100.0, 10.0).await {
                Ok(_) => println!("✓ Order moved to 50100.0"),
                Err(e) => eprintln!("Modify failed: {e}"),
            }

            match client.cancel_order(&order_id).await {
                Ok(_) => println!("✓ Order cancelled"),
                Err(e) => eprintln!("Cancel failed: {e}"),
            }
        }
        Err(e) => eprintln!("Order placement failed: {e}"),
    }

    println!("\nLatency averages (ms):");
    let mut averages: Vec<_> = metrics.snapshot().into_iter().collect();
    averages.sort_by(|a, b| a.0.cmp(&b.0));
    for (operation, average) in averages {
        println!("  {operation}: {average:.2}");
    }

    client.disconnect().await;
    println!("\n✓ Disconnected");
}

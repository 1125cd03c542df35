/*
[INPUT]:  Instrument name (defaults to BTC-PERPETUAL)
[OUTPUT]: Order-book snapshot and a registered book subscription
[POS]:    Examples - public market data
[UPDATE]: When market data API changes
*/

use std::sync::Arc;

use async_trait::async_trait;
use deribit_adapter::{DeribitClient, MetricsCollector, OrderBook, PushHandler};

struct PrintingHandler;

#[async_trait]
impl PushHandler for PrintingHandler {
    async fn on_push(&self, payload: &serde_json::Value) {
        println!("book update: {payload}");
    }
}

/// Example: order-book snapshot plus a subscription registration.
///
/// Pushed updates are not consumed here; a pump reading frames off the
/// channel would look handlers up via `push_handler` and drive them.
#[tokio::main]
async fn main() {
    println!("=== Deribit Market Depth Example ===\n");

    let instrument = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "BTC-PERPETUAL".to_string());

    let metrics = Arc::new(MetricsCollector::new());
    let client = DeribitClient::new(metrics.clone());

    if let Err(e) = client.connect().await {
        eprintln!("Failed to connect: {e}");
        return;
    }
    println!("✓ Connected to testnet");

    match client.order_book(&instrument).await {
        Ok(response) => match response.result_as::<OrderBook>() {
            Ok(book) => {
                println!("✓ {} levels bid / {} levels ask", book.bids.len(), book.asks.len());
                if let Some(spread) = book.spread() {
                    println!("  best bid {} / best ask {} (spread {spread})",
                        book.best_bid_price, book.best_ask_price);
                }
            }
            Err(e) => eprintln!("Unexpected book shape: {e}"),
        },
        Err(e) => eprintln!("Order book query failed: {e}"),
    }

    match client.subscribe_book(&instrument, Arc::new(PrintingHandler)).await {
        Ok(_) => println!("✓ Subscribed to book.{instrument}.100ms"),
        Err(e) => eprintln!("Subscription failed: {e}"),
    }
    println!("  registered instruments: {:?}", client.subscribed_instruments());

    println!(
        "\nOrder Book Query average: {:.2} ms",
        metrics.average("Order Book Query")
    );

    client.disconnect().await;
    println!("\n✓ Disconnected");
}

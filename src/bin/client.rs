use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "orders-api")]
#[command(about = "client cli used to interact with the orders server", version, long_about = None
)]
struct Cli {
    #[arg(long, global = true, default_value = DEFAULT_HOST, help = "Base url of the orders server")]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// order related ops
    #[command(arg_required_else_help = true)]
    Orders(OrdersArgs),
}

#[derive(Debug, Args)]
struct OrdersArgs {
    #[command(subcommand)]
    command: OrderCmds,
}

#[derive(Debug, Subcommand)]
enum OrderCmds {
    /// list orders
    List,
    /// create an order
    #[command(arg_required_else_help = true)]
    Create {
        #[arg(long, help = "Id of the product to order.", value_name = "PRODUCT_ID")]
        product_id: String,
        #[arg(long, help = "Number of items to order.", value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },
    /// show one order
    #[command(arg_required_else_help = true)]
    Get { order_id: String },
    /// delete one order
    #[command(arg_required_else_help = true)]
    Delete { order_id: String },
}

const DEFAULT_HOST: &str = "http://localhost:8080";

#[derive(Debug, Deserialize)]
struct OrdersResponse {
    message: String,
    #[serde(rename = "orderId")]
    order_id: Option<String>,
    order: Option<Value>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let host = args.host.trim_end_matches('/');
    let client = Client::new();

    match args.command {
        Commands::Orders(orders) => match orders.command {
            OrderCmds::List => {
                let res = client.get(format!("{}/orders", host)).send().await?;
                report(res, StatusCode::OK).await?;
            }
            OrderCmds::Create { product_id, quantity } => {
                println!("creating order for product={} quantity={}", product_id, quantity);
                let res = client
                    .post(format!("{}/orders", host))
                    .json(&serde_json::json!({
                        "productId": product_id,
                        "quantity": quantity,
                    }))
                    .send()
                    .await?;
                report(res, StatusCode::CREATED).await?;
            }
            OrderCmds::Get { order_id } => {
                let res = client.get(format!("{}/orders/{}", host, order_id)).send().await?;
                report(res, StatusCode::OK).await?;
            }
            OrderCmds::Delete { order_id } => {
                println!("deleting order={}", order_id);
                let res = client.delete(format!("{}/orders/{}", host, order_id)).send().await?;
                report(res, StatusCode::OK).await?;
            }
        },
    };
    Ok(())
}

async fn report(res: Response, expected: StatusCode) -> Result<(), anyhow::Error> {
    match res.status() {
        status if status == expected => {
            let res = res
                .json::<OrdersResponse>()
                .await
                .context("failed to read response, aborting")?;
            println!("{}", res.message);
            if let Some(order_id) = res.order_id {
                println!("order id = {}", order_id);
            }
            if let Some(order) = res.order {
                println!("order = {}", order);
            }
        }
        StatusCode::NOT_FOUND => {
            println!("Resource not found");
        }
        unexpected => {
            println!("got unexpected status code, {}", unexpected);
        }
    }
    Ok(())
}

use checkout_orders::{client_from_env, ClientError, OrderAction};
use std::env;
use std::process::ExitCode;

const USAGE: &str = "usage: checkout_orders <capture|authorize> <ORDER_ID>";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args: Vec<String> = env::args().skip(1).collect();
    let (action, order_id) = match args.as_slice() {
        [action, order_id] => match action.as_str() {
            "capture" => (OrderAction::Capture, order_id.as_str()),
            "authorize" => (OrderAction::Authorize, order_id.as_str()),
            _ => {
                eprintln!("{USAGE}");
                return ExitCode::from(2);
            }
        },
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(action, order_id).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{} of order {} failed: {}", action, order_id, e);
            ExitCode::FAILURE
        }
    }
}

async fn run(action: OrderAction, order_id: &str) -> Result<(), ClientError> {
    let client = client_from_env()?;
    let order = match action {
        OrderAction::Capture => client.capture(order_id).await?,
        OrderAction::Authorize => client.authorize(order_id).await?,
    };
    println!("{}", order.to_pretty_json()?);
    Ok(())
}

//! Builds a list, adds one name and tries to remove a name that is not there.
//!
//! Run with `cargo run --example remove_missing`; set `RUST_LOG` to change the
//! log level (defaults to `info`).

use list_utils::ArrayList;
use list_utils::dynamic::{self, Value};
use list_utils::helpers;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let mut list = ArrayList::new();
    list.add("Oscar".to_string());
    info!(?list, "added one element");

    match list.remove(&"iscar".to_string()) {
        Ok(removed) => info!(%removed, "removed"),
        Err(err) => error!(%err, "remove failed"),
    }

    let tuples = helpers::combination(&[vec![1, 2, 3], vec![4, 5]]);
    info!(?tuples, "combination");

    let sparse = Value::from(vec![Some(1), None, Some(2), None, Some(3)]);
    match dynamic::compact(&sparse) {
        Ok(values) => {
            let compacted = Value::List(values);
            info!(%compacted, "compact");
        }
        Err(err) => error!(%err, "compact failed"),
    }
}

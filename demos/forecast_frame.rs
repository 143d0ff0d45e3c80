//! End-to-end demo: reshape a series, score it with fixed coefficients,
//! and persist the results through a storage backend.
//!
//! Run with: cargo run --example forecast_frame

use std::collections::BTreeMap;

use anyhow::Result;
use ndarray::array;
use research_utils::{
    get_key, logging, series_to_supervised_1d, Backend, FixedLinearModel, JsonBackend,
    LoggingConfig,
};
use tracing::info;

fn main() -> Result<()> {
    logging::init(&LoggingConfig::default())?;

    // Frame a short series as (t-1) -> (t) pairs
    let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let frame = series_to_supervised_1d(&series, 1, 1, true)?;
    info!(rows = frame.n_rows(), cols = ?frame.columns, "built supervised frame");

    // Score the lag column with a fixed persistence model: y = 1.0 * x(t-1)
    let model = FixedLinearModel::new(array![[1.0]]);
    let lagged = frame.column("var1(t-1)").expect("lag column exists");
    let x = lagged.insert_axis(ndarray::Axis(1)).to_owned();
    let predictions = model.predict(&x)?;

    println!("Persistence forecasts:");
    for (input, pred) in lagged.iter().zip(predictions.column(0).iter()) {
        println!("  {input:.1} -> {pred:.1}");
    }

    // Persist a small result mapping and look a key up by value
    let mut results = BTreeMap::new();
    results.insert("first_forecast".to_string(), predictions[[0, 0]]);
    results.insert("last_forecast".to_string(), predictions[[frame.n_rows() - 1, 0]]);

    let dir = std::env::temp_dir().join("research_utils_demo");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("results.json");

    JsonBackend.save(&path, &results)?;
    let loaded: BTreeMap<String, f64> = JsonBackend.load(&path)?;
    info!(path = %path.display(), entries = loaded.len(), "round-tripped results");

    let key = get_key(&loaded, &loaded["first_forecast"])?;
    println!("Key holding the first forecast: {key}");

    Ok(())
}

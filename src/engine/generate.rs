//! Synthetic `station;reading` files for benchmarking the reader.

use std::io::{self, BufWriter, Write};

use tracing::info;

use crate::{core::rng::Lcg, engine::aggregate::Tenths};

/// Station names with a rough annual mean in °C.
pub const STATIONS: &[(&str, f64)] = &[
    ("Abha", 18.0),
    ("Accra", 26.4),
    ("Adelaide", 17.3),
    ("Anchorage", 2.8),
    ("Athens", 19.2),
    ("Bangkok", 28.6),
    ("Copenhagen", 9.1),
    ("Da Lat", 17.9),
    ("Dakar", 24.0),
    ("Dikson", -11.1),
    ("Dubai", 26.9),
    ("Hamburg", 9.7),
    ("Johannesburg", 15.5),
    ("Lhasa", 7.6),
    ("Marseille", 15.8),
    ("Napoli", 15.9),
    ("Nuuk", -1.4),
    ("Ouagadougou", 28.3),
    ("Palmerston North", 13.2),
    ("Philadelphia", 13.2),
    ("Reykjavík", 4.3),
    ("São Paulo", 19.7),
    ("Tromsø", 2.9),
    ("Vostok", -55.2),
    ("Yakutsk", -8.8),
    ("Zürich", 9.3),
];

/// Spread of readings around a station's mean, in °C.
const SPREAD: f64 = 10.0;
const LIMIT_TENTHS: i64 = 999;

#[derive(Clone, Debug)]
pub struct GenerateOptions {
    pub rows: u64,
    /// Distinct stations to draw from, capped at `STATIONS.len()`.
    pub stations: usize,
    pub seed: Option<u64>,
}

/// Write `opts.rows` line-terminated records to `out`. Returns the byte count.
pub fn write_measurements<W: Write>(out: W, opts: &GenerateOptions) -> io::Result<u64> {
    let mut rng = opts.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let pool = &STATIONS[..opts.stations.clamp(1, STATIONS.len())];
    let mut w = BufWriter::with_capacity(1 << 20, out);
    let mut bytes = 0u64;
    let mut line = String::with_capacity(64);

    for _ in 0..opts.rows {
        let (name, mean) = pool[rng.below(pool.len())];
        let tenths = (rng.normal(mean, SPREAD) * 10.0).round() as i64;
        let reading = Tenths(tenths.clamp(-LIMIT_TENTHS, LIMIT_TENTHS));

        line.clear();
        line.push_str(name);
        line.push(';');
        line.push_str(&reading.to_string());
        line.push('\n');
        w.write_all(line.as_bytes())?;
        bytes += line.len() as u64;
    }
    w.flush()?;
    info!(rows = opts.rows, stations = pool.len(), bytes, "measurements written");
    Ok(bytes)
}

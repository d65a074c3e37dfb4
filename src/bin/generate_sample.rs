use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};

use superstore_dashboard::data::model::{CATEGORY, CITY, ORDER_DATE, REGION, SALES, STATE};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Region → (State → Cities)
const GEOGRAPHY: &[(&str, &[(&str, &[&str])])] = &[
    (
        "Central",
        &[
            ("Texas", &["Houston", "Dallas", "San Antonio"]),
            ("Illinois", &["Chicago", "Springfield"]),
            ("Michigan", &["Detroit", "Ann Arbor"]),
        ],
    ),
    (
        "East",
        &[
            ("New York", &["New York City", "Buffalo", "Rochester"]),
            ("Pennsylvania", &["Philadelphia", "Pittsburgh"]),
            ("Ohio", &["Columbus", "Cleveland"]),
        ],
    ),
    (
        "South",
        &[
            ("Florida", &["Miami", "Jacksonville", "Tampa"]),
            ("Georgia", &["Atlanta", "Savannah"]),
            ("Virginia", &["Richmond", "Arlington"]),
        ],
    ),
    (
        "West",
        &[
            ("California", &["Los Angeles", "San Francisco", "San Diego"]),
            ("Washington", &["Seattle", "Spokane"]),
            ("Arizona", &["Phoenix", "Tucson"]),
        ],
    ),
];

/// Category → (base price, spread)
const CATEGORIES: &[(&str, f64, f64)] = &[
    ("Furniture", 350.0, 300.0),
    ("Office Supplies", 60.0, 80.0),
    ("Technology", 450.0, 500.0),
];

const ROWS: u64 = 2000;

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let first_day = NaiveDate::from_ymd_opt(2014, 1, 3).context("invalid start date")?;
    let span_days = 4 * 365;

    let output_path = Path::new("data").join("Superstore.csv");
    if let Some(dir) = output_path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    writer.write_record(["Row ID", ORDER_DATE, REGION, STATE, CITY, CATEGORY, SALES, "Quantity"])?;

    for row_id in 1..=ROWS {
        let date = first_day
            .checked_add_days(Days::new(rng.next_u64() % span_days))
            .context("date out of range")?;
        let &(region, states) = rng.pick(GEOGRAPHY);
        let &(state, cities) = rng.pick(states);
        let city = *rng.pick(cities);
        let &(category, base, spread) = rng.pick(CATEGORIES);
        let quantity = 1 + rng.next_u64() % 9;
        let sales = ((base + spread * rng.next_f64()) * quantity as f64 / 3.0 * 100.0).round() / 100.0;

        writer.write_record([
            row_id.to_string(),
            date.format("%m/%d/%Y").to_string(),
            region.to_string(),
            state.to_string(),
            city.to_string(),
            category.to_string(),
            sales.to_string(),
            quantity.to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {ROWS} orders to {}", output_path.display());
    Ok(())
}

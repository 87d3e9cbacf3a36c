//! Seeded synthetic consumption data for demos and tests.

use chrono::NaiveDate;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::SyntheticConfig;
use crate::model::{ConsumptionRecord, Facility};

/// Seed offset between facilities so their noise streams do not correlate.
const FACILITY_SEED_OFFSET: u64 = 57;

/// Generates one full month of daily records for each facility.
///
/// Each facility follows a sinusoidal monthly profile with its own phase
/// and a small per-facility baseline offset, plus Gaussian noise. Output
/// is fully determined by the configuration and seed.
pub fn generate(cfg: &SyntheticConfig, seed: u64) -> Vec<Facility> {
    let days = days_in_month(cfg.year, cfg.month);
    let mut facilities = Vec::with_capacity(cfg.facilities);

    for i in 0..cfg.facilities {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64 * FACILITY_SEED_OFFSET));
        let mut facility = Facility::new(i as u32 + 1, format!("Plant {:02}", i + 1));
        let base = cfg.base_kwh * (1.0 + 0.1 * i as f64);
        let phase = 0.7 * i as f64;

        for day in 1..=days {
            let Some(date) = NaiveDate::from_ymd_opt(cfg.year, cfg.month, day) else {
                continue;
            };
            let month_pos = (day - 1) as f64 / days as f64; // [0,1)
            let angle = 2.0 * std::f64::consts::PI * month_pos + phase;
            let kwh = base + cfg.amp_kwh * angle.sin() + gaussian_noise(&mut rng, cfg.noise_std);
            facility.records.push(ConsumptionRecord {
                date,
                kwh: kwh.max(0.0), // no negative consumption
            });
        }
        facilities.push(facility);
    }

    facilities
}

/// Gaussian-ish noise via Box-Muller.
fn gaussian_noise(rng: &mut StdRng, std: f64) -> f64 {
    if std <= 0.0 {
        return 0.0;
    }
    let u1: f64 = rng.random::<f64>().clamp(1e-12, 1.0);
    let u2: f64 = rng.random::<f64>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    z0 * std
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

/// Seeded splitmix64 stream; the same seed always yields the same files.
struct TripRng(u64);

impl TripRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform float in `[0, 1)` from the top 53 bits.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * f64::EPSILON / 2.0
    }

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: u64) -> u64 {
        (self.unit() * n as f64) as u64 % n.max(1)
    }

    /// Pick from a slice, skewed toward the front so modes are stable.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let u = self.unit();
        let idx = ((u * u) * items.len() as f64) as usize;
        &items[idx.min(items.len() - 1)]
    }
}

struct CitySpec {
    file: &'static str,
    stations: &'static [&'static str],
    demographics: bool,
}

const CITIES: [CitySpec; 3] = [
    CitySpec {
        file: "chicago.csv",
        stations: &[
            "Streeter Dr & Grand Ave",
            "Lake Shore Dr & Monroe St",
            "Clinton St & Washington Blvd",
            "Canal St & Adams St",
            "Theater on the Lake",
            "Michigan Ave & Oak St",
        ],
        demographics: true,
    },
    CitySpec {
        file: "new_york_city.csv",
        stations: &[
            "Pershing Square North",
            "E 17 St & Broadway",
            "W 21 St & 6 Ave",
            "Broadway & E 22 St",
            "Central Park S & 6 Ave",
            "12 Ave & W 40 St",
        ],
        demographics: true,
    },
    CitySpec {
        file: "washington.csv",
        stations: &[
            "Columbus Circle / Union Station",
            "Lincoln Memorial",
            "Jefferson Dr & 14th St SW",
            "Massachusetts Ave & Dupont Circle NW",
            "15th & P St NW",
            "Smithsonian-National Mall / Jefferson Dr & 12th St SW",
        ],
        demographics: false,
    },
];

const ROWS_PER_CITY: usize = 2000;

fn write_city(dir: &std::path::Path, spec: &CitySpec, rng: &mut TripRng) -> Result<PathBuf> {
    let path = dir.join(spec.file);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    let mut header = vec!["", "Start Time", "End Time", "Trip Duration", "Start Station", "End Station", "User Type"];
    if spec.demographics {
        header.extend(["Gender", "Birth Year"]);
    }
    writer.write_record(&header)?;

    let season_start = NaiveDate::from_ymd_opt(2017, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .context("building season start")?;
    let hours = [8, 17, 18, 7, 12, 16, 9, 13, 22, 2];
    let user_types = ["Subscriber", "Customer"];
    let genders = ["Male", "Female"];

    for row in 0..ROWS_PER_CITY {
        // January through June.
        let day_offset = rng.below(181) as i64;
        let hour = *rng.pick(&hours);
        let start = season_start
            + Duration::days(day_offset)
            + Duration::hours(hour)
            + Duration::seconds(rng.below(3600) as i64);
        let duration = 60 + rng.below(2400) as i64;
        let end = start + Duration::seconds(duration);

        let mut record = vec![
            (row * 7 + 11).to_string(),
            start.format("%Y-%m-%d %H:%M:%S").to_string(),
            end.format("%Y-%m-%d %H:%M:%S").to_string(),
            duration.to_string(),
            rng.pick(spec.stations).to_string(),
            rng.pick(spec.stations).to_string(),
            rng.pick(&user_types).to_string(),
        ];
        if spec.demographics {
            // Customers usually leave gender and birth year blank.
            let anonymous = record[6] == "Customer" && rng.unit() < 0.8;
            if anonymous {
                record.extend([String::new(), String::new()]);
            } else {
                record.push(rng.pick(&genders).to_string());
                record.push(format!("{}.0", 1989 - rng.below(40) as i64 + rng.below(12) as i64));
            }
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(path)
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = TripRng(42);
    for spec in &CITIES {
        let path = write_city(&out_dir, spec, &mut rng)?;
        println!("Wrote {ROWS_PER_CITY} trips to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = TripRng(42);
        let mut b = TripRng(42);
        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_eq!(xs, ys);
        assert_ne!(TripRng(7).next_u64(), xs[0]);
    }

    #[test]
    fn draws_stay_in_range() {
        let mut rng = TripRng(1);
        let items = ["a", "b", "c"];
        for _ in 0..1000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
            assert!(rng.below(181) < 181);
            assert!(items.contains(rng.pick(&items)));
        }
    }

    #[test]
    fn washington_file_has_no_demographic_columns() {
        let dir = tempfile::tempdir().unwrap();
        let spec = CITIES.iter().find(|c| !c.demographics).unwrap();
        let path = write_city(dir.path(), spec, &mut TripRng(42)).unwrap();
        let mut reader = csv::Reader::from_path(path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert!(!headers.iter().any(|h| h == "Gender"));
        assert_eq!(reader.records().count(), ROWS_PER_CITY);
    }
}

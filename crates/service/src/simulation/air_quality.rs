use chrono::{DateTime, Utc};
use models::conditions::{AirQualityReport, AqiCategory, Pollutant, PollutantLevels};
use rand::Rng;

pub const DEFAULT_LOCATION: &str = "Global";

/// (concentration low, concentration high, index low, index high)
type Breakpoint = (f64, f64, f64, f64);

const PM25: [Breakpoint; 5] = [
    (0.0, 12.0, 0.0, 50.0),
    (12.1, 35.4, 51.0, 100.0),
    (35.5, 55.4, 101.0, 150.0),
    (55.5, 150.4, 151.0, 200.0),
    (150.5, 250.4, 201.0, 300.0),
];
const PM10: [Breakpoint; 5] = [
    (0.0, 54.0, 0.0, 50.0),
    (55.0, 154.0, 51.0, 100.0),
    (155.0, 254.0, 101.0, 150.0),
    (255.0, 354.0, 151.0, 200.0),
    (355.0, 424.0, 201.0, 300.0),
];
const O3: [Breakpoint; 5] = [
    (0.0, 54.0, 0.0, 50.0),
    (55.0, 70.0, 51.0, 100.0),
    (71.0, 85.0, 101.0, 150.0),
    (86.0, 105.0, 151.0, 200.0),
    (106.0, 200.0, 201.0, 300.0),
];
const NO2: [Breakpoint; 5] = [
    (0.0, 53.0, 0.0, 50.0),
    (54.0, 100.0, 51.0, 100.0),
    (101.0, 360.0, 101.0, 150.0),
    (361.0, 649.0, 151.0, 200.0),
    (650.0, 1249.0, 201.0, 300.0),
];

const MAX_AQI: f64 = 300.0;

fn breakpoints(p: Pollutant) -> &'static [Breakpoint; 5] {
    match p {
        Pollutant::Pm25 => &PM25,
        Pollutant::Pm10 => &PM10,
        Pollutant::O3 => &O3,
        Pollutant::No2 => &NO2,
    }
}

/// EPA linear interpolation, capped at the top of the scale.
pub fn sub_index(p: Pollutant, concentration: f64) -> f64 {
    let c = concentration.max(0.0);
    for &(c_lo, c_hi, i_lo, i_hi) in breakpoints(p) {
        if c <= c_hi {
            let i = (i_hi - i_lo) / (c_hi - c_lo) * (c - c_lo) + i_lo;
            return i.max(i_lo);
        }
    }
    MAX_AQI
}

fn one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Simulated reading for `location`.
pub fn air_quality<R: Rng + ?Sized>(
    rng: &mut R,
    location: &str,
    measured_at: DateTime<Utc>,
) -> AirQualityReport {
    let pollutants = PollutantLevels {
        pm25: one_decimal(rng.gen_range(0.0..=180.0)),
        pm10: one_decimal(rng.gen_range(0.0..=300.0)),
        o3: one_decimal(rng.gen_range(0.0..=120.0)),
        no2: one_decimal(rng.gen_range(0.0..=400.0)),
    };
    let (dominant_pollutant, index) = [
        (Pollutant::Pm25, pollutants.pm25),
        (Pollutant::Pm10, pollutants.pm10),
        (Pollutant::O3, pollutants.o3),
        (Pollutant::No2, pollutants.no2),
    ]
    .into_iter()
    .map(|(p, c)| (p, sub_index(p, c)))
    .fold((Pollutant::Pm25, f64::MIN), |best, cur| if cur.1 > best.1 { cur } else { best });

    let aqi = index.round().clamp(0.0, MAX_AQI) as u16;
    AirQualityReport {
        location: location.to_string(),
        aqi,
        category: AqiCategory::from_aqi(aqi),
        dominant_pollutant,
        pollutants,
        measured_at,
    }
}

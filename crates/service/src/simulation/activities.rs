use models::conditions::{Activity, ActivityRecommendation, Conditions, Intensity, Setting};
use rand::Rng;

/// Above this AQI only indoor activities are suggested.
pub const OUTDOOR_AQI_LIMIT: u16 = 150;
/// At or below this temperature only indoor activities are suggested.
pub const OUTDOOR_MIN_TEMP_C: i32 = -15;

/// Fill unspecified conditions from `rng`.
pub fn conditions<R: Rng + ?Sized>(
    rng: &mut R,
    temperature_c: Option<i32>,
    snow_depth_cm: Option<i32>,
    aqi: Option<u16>,
) -> Conditions {
    Conditions {
        temperature_c: temperature_c.unwrap_or_else(|| rng.gen_range(-20..=35)),
        snow_depth_cm: snow_depth_cm.unwrap_or_else(|| rng.gen_range(0..=200)),
        aqi: aqi.unwrap_or_else(|| rng.gen_range(0..=300)),
    }
}

pub fn recommend(conditions: Conditions) -> ActivityRecommendation {
    let Conditions { temperature_c: t, snow_depth_cm: snow, aqi } = conditions;
    let mut activities = Vec::new();

    let outdoors_ok = aqi <= OUTDOOR_AQI_LIMIT && t > OUTDOOR_MIN_TEMP_C;
    if outdoors_ok {
        if snow >= 30 && t <= 2 {
            activities.push(Activity::new("Skiing", Setting::Outdoor, Intensity::High));
            activities.push(Activity::new("Snowboarding", Setting::Outdoor, Intensity::High));
        }
        if snow >= 10 {
            activities.push(Activity::new("Snowshoeing", Setting::Outdoor, Intensity::Moderate));
            activities.push(Activity::new("Sledding", Setting::Outdoor, Intensity::Low));
        }
        if t >= 15 {
            activities.push(Activity::new("Hiking", Setting::Outdoor, Intensity::Moderate));
            activities.push(Activity::new("Mountain biking", Setting::Outdoor, Intensity::High));
        } else if t >= 3 {
            activities.push(Activity::new("Trail running", Setting::Outdoor, Intensity::High));
        }
    }

    if activities.is_empty() {
        activities.push(Activity::new("Indoor climbing", Setting::Indoor, Intensity::High));
        activities.push(Activity::new("Spa", Setting::Indoor, Intensity::Low));
    }

    ActivityRecommendation { conditions, activities }
}

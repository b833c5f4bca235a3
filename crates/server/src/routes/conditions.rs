use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use chrono::Utc;
use models::conditions::{ActivityRecommendation, AirQualityReport, WeatherForecast};
use serde::Deserialize;
use service::simulation::{activities as activity_rules, air_quality as aqi_sim, weather};

use crate::errors::JsonApiError;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ForecastQuery {
    /// Number of days, 1..=14 (default 5)
    pub days: Option<u32>,
    pub location: Option<String>,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct AirQualityQuery {
    pub location: Option<String>,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ActivitiesQuery {
    pub temperature_c: Option<i32>,
    pub snow_depth_cm: Option<i32>,
    pub aqi: Option<u16>,
}

fn query<T>(q: Result<Query<T>, QueryRejection>) -> Result<T, JsonApiError> {
    q.map(|Query(v)| v).map_err(|e| JsonApiError::invalid_input(e.body_text()))
}

#[utoipa::path(
    get, path = "/weatherforecast", tag = "conditions",
    params(ForecastQuery),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::WeatherForecastDoc]),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn weather_forecast(
    q: Result<Query<ForecastQuery>, QueryRejection>,
) -> Result<Json<Vec<WeatherForecast>>, JsonApiError> {
    let q = query(q)?;
    let days = q.days.unwrap_or(weather::DEFAULT_FORECAST_DAYS);
    let today = Utc::now().date_naive();
    let items = weather::forecast(&mut rand::thread_rng(), today, days, q.location.as_deref())?;
    Ok(Json(items))
}

#[utoipa::path(
    get, path = "/airquality", tag = "conditions",
    params(AirQualityQuery),
    responses((status = 200, description = "OK", body = crate::openapi::AirQualityDoc))
)]
pub async fn air_quality(
    q: Result<Query<AirQualityQuery>, QueryRejection>,
) -> Result<Json<AirQualityReport>, JsonApiError> {
    let q = query(q)?;
    let location = q
        .location
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| aqi_sim::DEFAULT_LOCATION.to_string());
    let report = aqi_sim::air_quality(&mut rand::thread_rng(), &location, Utc::now());
    Ok(Json(report))
}

#[utoipa::path(
    get, path = "/activities", tag = "conditions",
    params(ActivitiesQuery),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ActivityRecommendationDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn activities(
    q: Result<Query<ActivitiesQuery>, QueryRejection>,
) -> Result<Json<ActivityRecommendation>, JsonApiError> {
    let q = query(q)?;
    let conditions = activity_rules::conditions(
        &mut rand::thread_rng(),
        q.temperature_c,
        q.snow_depth_cm,
        q.aqi,
    );
    Ok(Json(activity_rules::recommend(conditions)))
}

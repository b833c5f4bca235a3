//! OpenAPI document. Schemas mirror the wire types in `models`.

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorBodyDoc {
    pub message: String,
    /// Machine-readable code, e.g. `SnowparkNotFound`, `InvalidInput`, `CreateFailed`, `UnhandledException`
    pub code: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnowparkDoc {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub is_open: bool,
    pub temperature_c: i32,
    pub snow_depth_cm: i32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSnowparkDoc {
    pub name: String,
    pub location: String,
    pub is_open: Option<bool>,
    pub temperature_c: Option<i32>,
    pub snow_depth_cm: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnowparkPatchDoc {
    pub name: Option<String>,
    pub location: Option<String>,
    pub is_open: Option<bool>,
    pub temperature_c: Option<i32>,
    pub snow_depth_cm: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecastDoc {
    #[schema(format = Date, value_type = String)]
    pub date: String,
    pub location: Option<String>,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: String,
}

#[derive(Serialize, ToSchema)]
pub struct PollutantLevelsDoc { pub pm25: f64, pub pm10: f64, pub o3: f64, pub no2: f64 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AirQualityDoc {
    pub location: String,
    pub aqi: u16,
    /// EPA category name
    pub category: String,
    /// One of `pm25`, `pm10`, `o3`, `no2`
    pub dominant_pollutant: String,
    pub pollutants: PollutantLevelsDoc,
    #[schema(format = DateTime, value_type = String)]
    pub measured_at: String,
}

#[derive(Serialize, ToSchema)]
pub struct ActivityDoc {
    pub name: String,
    /// `indoor` or `outdoor`
    pub setting: String,
    /// `low`, `moderate` or `high`
    pub intensity: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConditionsDoc { pub temperature_c: i32, pub snow_depth_cm: i32, pub aqi: u16 }

#[derive(Serialize, ToSchema)]
pub struct ActivityRecommendationDoc {
    pub conditions: ConditionsDoc,
    pub activities: Vec<ActivityDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::snowparks::list,
        crate::routes::snowparks::create,
        crate::routes::snowparks::get,
        crate::routes::snowparks::update,
        crate::routes::snowparks::delete,
        crate::routes::conditions::weather_forecast,
        crate::routes::conditions::air_quality,
        crate::routes::conditions::activities,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBodyDoc,
            SnowparkDoc,
            CreateSnowparkDoc,
            SnowparkPatchDoc,
            WeatherForecastDoc,
            PollutantLevelsDoc,
            AirQualityDoc,
            ActivityDoc,
            ConditionsDoc,
            ActivityRecommendationDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "snowparks"),
        (name = "conditions")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() -> Result<(), anyhow::Error> {
        let doc = serde_json::to_value(ApiDoc::openapi())?;
        let paths = doc["paths"].as_object().cloned().unwrap_or_default();
        for p in ["/health", "/snowparks", "/snowparks/{id}", "/weatherforecast", "/airquality", "/activities"] {
            assert!(paths.contains_key(p), "missing path {p}");
        }
        assert!(doc["paths"]["/snowparks/{id}"]["patch"].is_object());
        assert!(doc["components"]["schemas"]["SnowparkDoc"]["properties"]["snowDepthCm"].is_object());
        Ok(())
    }
}

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Flight as returned by the API.
#[derive(Serialize, ToSchema)]
pub struct FlightDoc {
    #[serde(rename = "idFlight")]
    pub id: i64,
    #[serde(rename = "nombreAvion")]
    pub aircraft_name: String,
    #[serde(rename = "numeroVuelo")]
    pub flight_number: String,
    #[serde(rename = "origen")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "capacidad")]
    pub capacity: i32,
    /// 1..=5
    pub rating: i32,
    #[serde(rename = "planvuelo")]
    pub flight_plan_id: i64,
    #[serde(rename = "cumplido")]
    pub completed: Option<bool>,
}

/// Request body for save (id ignored) and update (id required).
#[derive(Serialize, ToSchema)]
pub struct FlightPayloadDoc {
    #[serde(rename = "idFlight")]
    pub id: Option<i64>,
    #[serde(rename = "nombreAvion")]
    pub aircraft_name: String,
    #[serde(rename = "numeroVuelo")]
    pub flight_number: String,
    #[serde(rename = "origen")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "capacidad")]
    pub capacity: i32,
    pub rating: i32,
    #[serde(rename = "planvuelo")]
    pub flight_plan_id: i64,
    #[serde(rename = "cumplido")]
    pub completed: Option<bool>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::flights::save,
        crate::routes::flights::list_all,
        crate::routes::flights::list_by_id,
        crate::routes::flights::top_flights,
        crate::routes::flights::update,
        crate::routes::flights::delete,
    ),
    components(
        schemas(
            HealthResponse,
            FlightDoc,
            FlightPayloadDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "flight")
    )
)]
pub struct ApiDoc;

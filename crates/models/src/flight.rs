use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;
pub const TEXT_MAX_LEN: usize = 80;

/// Persisted flight row. JSON field names match the public API.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "idflight")]
    #[serde(rename = "idFlight")]
    pub id: i64,
    #[sea_orm(column_name = "nombreavion")]
    #[serde(rename = "nombreAvion")]
    pub aircraft_name: String,
    #[sea_orm(column_name = "numerovuelo")]
    #[serde(rename = "numeroVuelo")]
    pub flight_number: String,
    #[sea_orm(column_name = "origen")]
    #[serde(rename = "origen")]
    pub origin: String,
    #[sea_orm(column_name = "destino")]
    #[serde(rename = "destino")]
    pub destination: String,
    #[sea_orm(column_name = "capacidad")]
    #[serde(rename = "capacidad")]
    pub capacity: i32,
    pub rating: i32,
    #[sea_orm(column_name = "planvuelo")]
    #[serde(rename = "planvuelo")]
    pub flight_plan_id: i64,
    #[sea_orm(column_name = "cumplido")]
    #[serde(rename = "cumplido")]
    pub completed: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Inbound flight body for save and update.
///
/// `idFlight` is ignored on save and required on update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightPayload {
    #[serde(rename = "idFlight", default, skip_serializing_if = "Option::is_none")]
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
    #[serde(rename = "cumplido", default)]
    pub completed: Option<bool>,
}

impl FlightPayload {
    /// Active model for an insert; the key is left to the database.
    pub fn into_new_active_model(self) -> ActiveModel {
        let mut am = ActiveModel { ..Default::default() };
        self.apply_to(&mut am);
        am
    }

    /// Overwrite every mutable column of `am` with this payload.
    pub fn apply_to(self, am: &mut ActiveModel) {
        am.aircraft_name = Set(self.aircraft_name);
        am.flight_number = Set(self.flight_number);
        am.origin = Set(self.origin);
        am.destination = Set(self.destination);
        am.capacity = Set(self.capacity);
        am.rating = Set(self.rating);
        am.flight_plan_id = Set(self.flight_plan_id);
        am.completed = Set(self.completed);
    }
}

impl From<Model> for FlightPayload {
    fn from(m: Model) -> Self {
        Self {
            id: Some(m.id),
            aircraft_name: m.aircraft_name,
            flight_number: m.flight_number,
            origin: m.origin,
            destination: m.destination,
            capacity: m.capacity,
            rating: m.rating,
            flight_plan_id: m.flight_plan_id,
            completed: m.completed,
        }
    }
}

pub fn validate_rating(rating: i32) -> Result<(), errors::ModelError> {
    if rating > RATING_MAX {
        return Err(errors::ModelError::Validation(format!("rating must be ≤ {RATING_MAX}")));
    }
    if rating < RATING_MIN {
        return Err(errors::ModelError::Validation(format!("rating must be ≥ {RATING_MIN}")));
    }
    Ok(())
}

/// `field` is the JSON name, used in the message.
pub fn validate_text(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > TEXT_MAX_LEN {
        return Err(errors::ModelError::Validation(format!(
            "{field} must be at most {TEXT_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Checks run before any write reaches the table. Rating first, so an
/// out-of-range rating is reported even when other fields are also bad.
pub fn validate_payload(p: &FlightPayload) -> Result<(), errors::ModelError> {
    validate_rating(p.rating)?;
    validate_text("nombreAvion", &p.aircraft_name)?;
    validate_text("numeroVuelo", &p.flight_number)?;
    validate_text("origen", &p.origin)?;
    validate_text("destino", &p.destination)?;
    Ok(())
}

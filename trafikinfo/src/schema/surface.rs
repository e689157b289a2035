//! Road surface categories.
//!
//! Pavement inventory and road surface measurements, keyed by road
//! number and a continuous length along it. Acronym element names
//! such as `IRIRight` and `AADT` do not follow PascalCase and carry
//! explicit renames.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::common::{ErrorMessage, Geometry, Info};

/// Direction along a road for surface records.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoadDirection {
    /// Direction code.
    pub code: Option<i32>,

    /// Direction in text, e.g. `Med`.
    pub value: Option<String>,
}

/// One `<RESULT>` block of a MeasurementData100 response.
#[derive(Debug, Clone, Deserialize)]
pub struct MeasurementData100Result {
    /// The measurement records.
    #[serde(rename = "MeasurementData100", default)]
    pub measurements: Vec<MeasurementData100>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// Surface measurements averaged over 100 metre stretches.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MeasurementData100 {
    /// County number of the stretch.
    pub county: Option<i32>,

    /// Direction along the road.
    pub direction: Option<RoadDirection>,

    /// End of the stretch, metres along the road.
    pub end_continuous_length: Option<i32>,

    /// Roughness index for the left wheel track, mm/m.
    #[serde(rename = "IRILeft")]
    pub iri_left: Option<f64>,

    /// Roughness index for the right wheel track, mm/m.
    #[serde(rename = "IRIRight")]
    pub iri_right: Option<f64>,

    /// Lane the measurement was taken in.
    pub lane: Option<i32>,

    /// Stretch length, metres.
    pub length: Option<i32>,

    /// Kind of measurement run.
    pub measurement_data_type: Option<String>,

    /// Date of the measurement run.
    pub measurement_date: Option<DateTime<FixedOffset>>,

    /// Exact time of the measurement.
    pub measurement_date_specific: Option<DateTime<FixedOffset>>,

    /// Mean profile depth, mm.
    pub mean_profile_depth: Option<f64>,

    /// Road main number, e.g. 4 for E4.
    pub road_main_number: Option<i32>,

    /// Road sub number.
    pub road_sub_number: Option<i32>,

    /// Maximum rut depth over a 15 point profile, mm.
    pub rut_depth_max15: Option<f64>,

    /// Maximum rut depth over a 17 point profile, mm.
    pub rut_depth_max17: Option<f64>,

    /// Start of the stretch, metres along the road.
    pub start_continuous_length: Option<i32>,

    /// When the record was loaded into the service.
    pub time_stamp: Option<DateTime<FixedOffset>>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a MeasurementData20 response.
#[derive(Debug, Clone, Deserialize)]
pub struct MeasurementData20Result {
    /// The measurement records.
    #[serde(rename = "MeasurementData20", default)]
    pub measurements: Vec<MeasurementData20>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// Surface measurements averaged over 20 metre stretches.
///
/// Same measurement run as [`MeasurementData100`] at a finer
/// resolution, with a few extra edge and water readings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MeasurementData20 {
    /// County number of the stretch.
    pub county: Option<i32>,

    /// Crossfall at the rut bottom, percent.
    pub crossfall_rut_bottom: Option<f64>,

    /// Direction along the road.
    pub direction: Option<RoadDirection>,

    /// Pavement edge depth, mm.
    pub edge_depth: Option<f64>,

    /// End of the stretch, metres along the road.
    pub end_continuous_length: Option<i32>,

    /// Roughness index for the left wheel track, mm/m.
    #[serde(rename = "IRILeft")]
    pub iri_left: Option<f64>,

    /// Roughness index for the right wheel track, mm/m.
    #[serde(rename = "IRIRight")]
    pub iri_right: Option<f64>,

    /// Lane the measurement was taken in.
    pub lane: Option<i32>,

    /// Stretch length, metres.
    pub length: Option<i32>,

    /// Kind of measurement run.
    pub measurement_data_type: Option<String>,

    /// Date of the measurement run.
    pub measurement_date: Option<DateTime<FixedOffset>>,

    /// Mean profile depth, mm.
    pub mean_profile_depth: Option<f64>,

    /// Road main number.
    pub road_main_number: Option<i32>,

    /// Road sub number.
    pub road_sub_number: Option<i32>,

    /// Maximum rut depth over a 15 point profile, mm.
    pub rut_depth_max15: Option<f64>,

    /// Maximum rut depth over a 17 point profile, mm.
    pub rut_depth_max17: Option<f64>,

    /// Start of the stretch, metres along the road.
    pub start_continuous_length: Option<i32>,

    /// When the record was loaded into the service.
    pub time_stamp: Option<DateTime<FixedOffset>>,

    /// Standing water area, percent of the stretch.
    pub water_area: Option<f64>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a PavementData response.
#[derive(Debug, Clone, Deserialize)]
pub struct PavementDataResult {
    /// The pavement records.
    #[serde(rename = "PavementData", default)]
    pub pavements: Vec<PavementData>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// Pavement inventory for a road stretch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PavementData {
    /// Who laid the pavement.
    pub contractor: Option<String>,

    /// County number of the stretch.
    pub county: Option<i32>,

    /// Direction along the road.
    pub direction: Option<RoadDirection>,

    /// End of the stretch, metres along the road.
    pub end_continuous_length: Option<i32>,

    /// Stretch length, metres.
    pub length: Option<i32>,

    /// Largest stone size in the wear course, mm.
    pub max_stone_size: Option<i32>,

    /// When the pavement was laid.
    pub pavement_date: Option<DateTime<FixedOffset>>,

    /// Pavement kind, e.g. `ABS`.
    pub pavement_type: Option<String>,

    /// Road main number.
    pub road_main_number: Option<i32>,

    /// Road sub number.
    pub road_sub_number: Option<i32>,

    /// Start of the stretch, metres along the road.
    pub start_continuous_length: Option<i32>,

    /// When the record was loaded into the service.
    pub time_stamp: Option<DateTime<FixedOffset>>,

    /// Surface treatment applied.
    pub treatment: Option<String>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a RoadData response.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadDataResult {
    /// The road inventory records.
    #[serde(rename = "RoadData", default)]
    pub roads: Vec<RoadData>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// Road network inventory for a road stretch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoadData {
    /// Annual average daily traffic, vehicles per day.
    #[serde(rename = "AADT")]
    pub aadt: Option<i32>,

    /// Annual average daily heavy traffic, vehicles per day.
    #[serde(rename = "AADTHeavyVehicles")]
    pub aadt_heavy_vehicles: Option<i32>,

    /// How the traffic figure was obtained.
    #[serde(rename = "AADTMeasurementMethod")]
    pub aadt_measurement_method: Option<String>,

    /// Year the traffic figure was measured.
    #[serde(rename = "AADTMeasurementYear")]
    pub aadt_measurement_year: Option<i32>,

    /// Bearing capacity class.
    pub bearing_capacity: Option<String>,

    /// County number of the stretch.
    pub county: Option<i32>,

    /// Direction along the road.
    pub direction: Option<RoadDirection>,

    /// End of the stretch, metres along the road.
    pub end_continuous_length: Option<i32>,

    /// Stretch length, metres.
    pub length: Option<i32>,

    /// Functional road category.
    pub road_category: Option<String>,

    /// Road main number.
    pub road_main_number: Option<i32>,

    /// Who maintains the road.
    pub road_owner: Option<String>,

    /// Road sub number.
    pub road_sub_number: Option<i32>,

    /// Road kind, e.g. `Motorväg`.
    pub road_type: Option<String>,

    /// Carriageway width, metres.
    pub road_width: Option<f64>,

    /// Posted speed limit, km/h.
    pub speed_limit: Option<i32>,

    /// Start of the stretch, metres along the road.
    pub start_continuous_length: Option<i32>,

    /// When the record was loaded into the service.
    pub time_stamp: Option<DateTime<FixedOffset>>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a RoadGeometry response.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadGeometryResult {
    /// The geometry records.
    #[serde(rename = "RoadGeometry", default)]
    pub geometries: Vec<RoadGeometry>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// Centre-line geometry for a road stretch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoadGeometry {
    /// County number of the stretch.
    pub county: Option<i32>,

    /// Direction along the road.
    pub direction: Option<RoadDirection>,

    /// End of the stretch, metres along the road.
    pub end_continuous_length: Option<i32>,

    /// Centre line as WKT line strings.
    pub geometry: Option<Geometry>,

    /// Stretch length, metres.
    pub length: Option<i32>,

    /// Road main number.
    pub road_main_number: Option<i32>,

    /// Road sub number.
    pub road_sub_number: Option<i32>,

    /// Start of the stretch, metres along the road.
    pub start_continuous_length: Option<i32>,

    /// When the record was loaded into the service.
    pub time_stamp: Option<DateTime<FixedOffset>>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

//! Typed bindings for the data categories the service publishes.
//!
//! Each category pairs a result type (the `*Result` structs in the
//! submodules) with the `objecttype` and `schemaversion` the service
//! expects when querying it. The pairing is declared once, in the
//! table at the bottom of this module; [`ResultSchema`] is the bound
//! the client takes so a turbofish picks the category.

pub mod common;
pub mod railroad;
pub mod road;
pub mod surface;

pub use common::{ErrorMessage, Geometry, Info, LastModified};
pub use railroad::{
    RailCrossingResult, ReasonCodeResult, TrainAnnouncementResult, TrainMessageResult,
    TrainStationResult,
};
pub use road::{
    CameraResult, FerryAnnouncementResult, FerryRouteResult, IconResult, ParkingResult,
    RoadConditionOverviewResult, RoadConditionResult, SituationResult, TrafficFlowResult,
    TrafficSafetyCameraResult, TravelTimeRouteResult, WeatherStationResult,
};
pub use surface::{
    MeasurementData100Result, MeasurementData20Result, PavementDataResult, RoadDataResult,
    RoadGeometryResult,
};

use serde::de::DeserializeOwned;

/// A result type together with the object type name and schema version
/// it is queried under.
///
/// The two constants become the reserved `objecttype` and
/// `schemaversion` attributes of the query element, unless the caller
/// already set them. The `DeserializeOwned` bound is what lets the
/// client decode the response body into the type; `Send + Sync +
/// 'static` lets decoders for it be cached and shared across tasks.
pub trait ResultSchema: DeserializeOwned + Send + Sync + 'static {
    /// Value for the query's `objecttype` attribute.
    const OBJECT_TYPE: &'static str;

    /// Value for the query's `schemaversion` attribute.
    const SCHEMA_VERSION: &'static str;
}

/// Declares the category table: one `Type => ("objecttype", "schemaversion")`
/// row per category the service publishes.
macro_rules! result_schema {
    ($($result:ty => ($object_type:literal, $schema_version:literal),)*) => {
        $(
            impl ResultSchema for $result {
                const OBJECT_TYPE: &'static str = $object_type;
                const SCHEMA_VERSION: &'static str = $schema_version;
            }
        )*
    };
}

result_schema! {
    // Rail road
    RailCrossingResult => ("RailCrossing", "1.4"),
    ReasonCodeResult => ("ReasonCode", "1"),
    TrainAnnouncementResult => ("TrainAnnouncement", "1.6"),
    TrainMessageResult => ("TrainMessage", "1.6"),
    TrainStationResult => ("TrainStation", "1"),

    // Road
    CameraResult => ("Camera", "1"),
    FerryAnnouncementResult => ("FerryAnnouncement", "1.2"),
    FerryRouteResult => ("FerryRoute", "1.2"),
    IconResult => ("Icon", "1"),
    ParkingResult => ("Parking", "1.4"),
    RoadConditionResult => ("RoadCondition", "1.2"),
    RoadConditionOverviewResult => ("RoadConditionOverview", "1"),
    SituationResult => ("Situation", "1.4"),
    TrafficFlowResult => ("TrafficFlow", "1.4"),
    TrafficSafetyCameraResult => ("TrafficSafetyCamera", "1"),
    TravelTimeRouteResult => ("TravelTimeRoute", "1.5"),
    WeatherStationResult => ("WeatherStation", "1"),

    // Road surface
    MeasurementData100Result => ("MeasurementData100", "1"),
    MeasurementData20Result => ("MeasurementData20", "1"),
    PavementDataResult => ("PavementData", "1"),
    RoadDataResult => ("RoadData", "1"),
    RoadGeometryResult => ("RoadGeometry", "1"),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_binds_expected_versions() {
        assert_eq!(RailCrossingResult::OBJECT_TYPE, "RailCrossing");
        assert_eq!(RailCrossingResult::SCHEMA_VERSION, "1.4");
        assert_eq!(TrainAnnouncementResult::OBJECT_TYPE, "TrainAnnouncement");
        assert_eq!(TrainAnnouncementResult::SCHEMA_VERSION, "1.6");
        assert_eq!(CameraResult::SCHEMA_VERSION, "1");
        assert_eq!(TravelTimeRouteResult::SCHEMA_VERSION, "1.5");
        assert_eq!(MeasurementData20Result::OBJECT_TYPE, "MeasurementData20");
    }

    #[test]
    fn object_types_are_distinct() {
        let object_types = [
            RailCrossingResult::OBJECT_TYPE,
            ReasonCodeResult::OBJECT_TYPE,
            TrainAnnouncementResult::OBJECT_TYPE,
            TrainMessageResult::OBJECT_TYPE,
            TrainStationResult::OBJECT_TYPE,
            CameraResult::OBJECT_TYPE,
            FerryAnnouncementResult::OBJECT_TYPE,
            FerryRouteResult::OBJECT_TYPE,
            IconResult::OBJECT_TYPE,
            ParkingResult::OBJECT_TYPE,
            RoadConditionResult::OBJECT_TYPE,
            RoadConditionOverviewResult::OBJECT_TYPE,
            SituationResult::OBJECT_TYPE,
            TrafficFlowResult::OBJECT_TYPE,
            TrafficSafetyCameraResult::OBJECT_TYPE,
            TravelTimeRouteResult::OBJECT_TYPE,
            WeatherStationResult::OBJECT_TYPE,
            MeasurementData100Result::OBJECT_TYPE,
            MeasurementData20Result::OBJECT_TYPE,
            PavementDataResult::OBJECT_TYPE,
            RoadDataResult::OBJECT_TYPE,
            RoadGeometryResult::OBJECT_TYPE,
        ];

        let mut sorted = object_types.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), object_types.len());
    }

    #[test]
    fn schema_versions_are_plain_version_strings() {
        for version in [
            RailCrossingResult::SCHEMA_VERSION,
            TrainAnnouncementResult::SCHEMA_VERSION,
            FerryRouteResult::SCHEMA_VERSION,
            RoadDataResult::SCHEMA_VERSION,
        ] {
            assert!(
                version.chars().all(|c| c.is_ascii_digit() || c == '.'),
                "unexpected schema version {version:?}"
            );
        }
    }
}

//! Rail-road data categories.
//!
//! These types map to the response schemas of the rail-road services:
//! level crossings, delay reason codes, train announcements, traffic
//! messages and stations. They use `Option` liberally because the
//! service omits elements rather than sending empty ones.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::common::{ErrorMessage, Geometry, Info};

/// One `<RESULT>` block of a RailCrossing response.
#[derive(Debug, Clone, Deserialize)]
pub struct RailCrossingResult {
    /// The level-crossing records.
    #[serde(rename = "RailCrossing", default)]
    pub rail_crossings: Vec<RailCrossing>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// A level crossing between road and rail.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RailCrossing {
    /// Service-wide object id.
    pub object_id: Option<String>,

    /// The crossing's id in the national level-crossing registry.
    pub level_crossing_id: Option<i64>,

    /// Position of the crossing.
    pub geometry: Option<Geometry>,

    /// Number of tracks crossing the road.
    pub number_of_tracks: Option<i32>,

    /// How the crossing protection operates.
    pub operating_mode: Option<String>,

    /// Free height under the portal, in metres.
    pub portal_height: Option<f64>,

    /// Official name of the crossing road.
    pub road_name_official: Option<String>,

    /// Trains per day.
    pub train_flow: Option<i32>,

    /// Vehicles per day.
    pub vehicle_flow: Option<i32>,

    /// Whether the record has been deleted from the register.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a ReasonCode response.
#[derive(Debug, Clone, Deserialize)]
pub struct ReasonCodeResult {
    /// The reason-code records.
    #[serde(rename = "ReasonCode", default)]
    pub reason_codes: Vec<ReasonCode>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// A delay/cancellation reason code with its description levels.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReasonCode {
    /// The code itself, e.g. `ANA008`.
    pub code: Option<String>,

    /// Coarsest description level.
    pub level1_description: Option<String>,

    /// Middle description level.
    pub level2_description: Option<String>,

    /// Finest description level.
    pub level3_description: Option<String>,

    /// Description of the group the code belongs to.
    pub group_description: Option<String>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a TrainAnnouncement response.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainAnnouncementResult {
    /// The announcement records.
    #[serde(rename = "TrainAnnouncement", default)]
    pub train_announcements: Vec<TrainAnnouncement>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// One arrival or departure of a train at a station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainAnnouncement {
    /// Unique id of this announcement.
    pub activity_id: Option<String>,

    /// `Ankomst` (arrival) or `Avgang` (departure).
    pub activity_type: Option<String>,

    /// Whether this call is advertised to the public.
    pub advertised: Option<bool>,

    /// Timetabled time at the station.
    pub advertised_time_at_location: Option<DateTime<FixedOffset>>,

    /// Advertised train number.
    pub advertised_train_ident: Option<String>,

    /// Whether the call is canceled.
    pub canceled: Option<bool>,

    /// Estimated time, when the train is delayed.
    pub estimated_time_at_location: Option<DateTime<FixedOffset>>,

    /// Origin station(s) of the train.
    #[serde(default)]
    pub from_location: Vec<TrainLocation>,

    /// Destination station(s) of the train.
    #[serde(default)]
    pub to_location: Vec<TrainLocation>,

    /// Who owns the traffic information.
    pub information_owner: Option<String>,

    /// Station signature the announcement applies to.
    pub location_signature: Option<String>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,

    /// Operator of the train.
    pub operator: Option<String>,

    /// Product names, e.g. `SJ Regional`.
    #[serde(default)]
    pub product_information: Vec<String>,

    /// Timetabled departure date and time from the origin.
    pub scheduled_departure_date_time: Option<DateTime<FixedOffset>>,

    /// Technical train number.
    pub technical_train_ident: Option<String>,

    /// Actual time, once the train has arrived or departed.
    pub time_at_location: Option<DateTime<FixedOffset>>,

    /// Track at the station.
    pub track_at_location: Option<String>,

    /// Kind of traffic, e.g. `Tåg`.
    pub type_of_traffic: Option<String>,
}

/// An origin or destination entry of an announcement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainLocation {
    /// Station signature.
    pub location_name: Option<String>,

    /// Display priority among sibling entries.
    pub priority: Option<i32>,

    /// Position in the train's route.
    pub order: Option<i32>,
}

/// One `<RESULT>` block of a TrainMessage response.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainMessageResult {
    /// The traffic-message records.
    #[serde(rename = "TrainMessage", default)]
    pub train_messages: Vec<TrainMessage>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// A rail traffic message, e.g. a disruption notice.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainMessage {
    /// Unique id of the event.
    pub event_id: Option<String>,

    /// Station signatures affected by the event.
    #[serde(default)]
    pub affected_location: Vec<String>,

    /// Counties affected by the event.
    #[serde(default)]
    pub county_no: Vec<i32>,

    /// Public description of the event.
    pub external_description: Option<String>,

    /// Position of the event.
    pub geometry: Option<Geometry>,

    /// When the message was last updated.
    pub last_update_date_time: Option<DateTime<FixedOffset>>,

    /// Forecast end of the traffic impact.
    pub prognosticated_end_date_time_traffic_impact: Option<DateTime<FixedOffset>>,

    /// Description of the reason code.
    pub reason_code_text: Option<String>,

    /// When the event started.
    pub start_date_time: Option<DateTime<FixedOffset>>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a TrainStation response.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainStationResult {
    /// The station records.
    #[serde(rename = "TrainStation", default)]
    pub train_stations: Vec<TrainStation>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// A station in the rail network.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainStation {
    /// Whether traffic information is advertised for the station.
    pub advertised: Option<bool>,

    /// Public station name, e.g. `Stockholm Central`.
    pub advertised_location_name: Option<String>,

    /// Shortened public name.
    pub advertised_short_location_name: Option<String>,

    /// Country the station lies in.
    pub country_code: Option<String>,

    /// Counties the station lies in.
    #[serde(default)]
    pub county_no: Vec<i32>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// Position of the station.
    pub geometry: Option<Geometry>,

    /// Station signature, e.g. `Cst`.
    pub location_signature: Option<String>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,

    /// Platform lines at the station.
    #[serde(default)]
    pub platform_line: Vec<String>,

    /// Whether forecasts exist for the station.
    pub prognosticated: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_train_station_result() {
        let xml = r#"<RESULT>
            <TrainStation>
                <AdvertisedLocationName>Stockholm Central</AdvertisedLocationName>
                <LocationSignature>Cst</LocationSignature>
                <CountryCode>SE</CountryCode>
                <CountyNo>1</CountyNo>
                <Advertised>true</Advertised>
                <Geometry>
                    <WGS84>POINT (18.058151 59.330136)</WGS84>
                </Geometry>
            </TrainStation>
            <TrainStation>
                <AdvertisedLocationName>Göteborg Central</AdvertisedLocationName>
                <LocationSignature>G</LocationSignature>
            </TrainStation>
            <INFO>
                <LASTCHANGEID>123456789</LASTCHANGEID>
            </INFO>
        </RESULT>"#;

        let result: TrainStationResult = quick_xml::de::from_str(xml).unwrap();

        assert_eq!(result.train_stations.len(), 2);
        let cst = &result.train_stations[0];
        assert_eq!(
            cst.advertised_location_name.as_deref(),
            Some("Stockholm Central")
        );
        assert_eq!(cst.location_signature.as_deref(), Some("Cst"));
        assert_eq!(cst.county_no, vec![1]);
        assert_eq!(cst.advertised, Some(true));
        assert!(cst.geometry.as_ref().unwrap().wgs84.is_some());
        assert_eq!(
            result.info.unwrap().last_change_id.as_deref(),
            Some("123456789")
        );
        assert!(result.error.is_none());
    }

    #[test]
    fn deserialize_train_announcement() {
        let xml = r#"<RESULT>
            <TrainAnnouncement>
                <ActivityId>1500adde-7c87-4c4c-91fe-8c4ecf7265cc</ActivityId>
                <ActivityType>Avgang</ActivityType>
                <AdvertisedTimeAtLocation>2024-03-15T10:45:00.000+01:00</AdvertisedTimeAtLocation>
                <AdvertisedTrainIdent>537</AdvertisedTrainIdent>
                <Canceled>false</Canceled>
                <LocationSignature>Cst</LocationSignature>
                <TrackAtLocation>11</TrackAtLocation>
                <FromLocation>
                    <LocationName>Cst</LocationName>
                    <Priority>1</Priority>
                    <Order>0</Order>
                </FromLocation>
                <ToLocation>
                    <LocationName>G</LocationName>
                    <Priority>1</Priority>
                    <Order>0</Order>
                </ToLocation>
                <ProductInformation>SJ Snabbtåg</ProductInformation>
            </TrainAnnouncement>
        </RESULT>"#;

        let result: TrainAnnouncementResult = quick_xml::de::from_str(xml).unwrap();

        assert_eq!(result.train_announcements.len(), 1);
        let announcement = &result.train_announcements[0];
        assert_eq!(announcement.activity_type.as_deref(), Some("Avgang"));
        assert_eq!(announcement.canceled, Some(false));
        assert_eq!(announcement.track_at_location.as_deref(), Some("11"));
        assert_eq!(
            announcement.advertised_time_at_location.unwrap().offset().local_minus_utc(),
            3600
        );
        assert_eq!(announcement.from_location.len(), 1);
        assert_eq!(
            announcement.from_location[0].location_name.as_deref(),
            Some("Cst")
        );
        assert_eq!(announcement.to_location[0].order, Some(0));
        assert_eq!(announcement.product_information, vec!["SJ Snabbtåg"]);
    }

    #[test]
    fn deserialize_reason_code() {
        let xml = r#"<RESULT>
            <ReasonCode>
                <Code>ANA008</Code>
                <Level1Description>Banarbete</Level1Description>
                <GroupDescription>Avvikelse</GroupDescription>
                <Deleted>false</Deleted>
            </ReasonCode>
        </RESULT>"#;

        let result: ReasonCodeResult = quick_xml::de::from_str(xml).unwrap();

        let code = &result.reason_codes[0];
        assert_eq!(code.code.as_deref(), Some("ANA008"));
        assert_eq!(code.level1_description.as_deref(), Some("Banarbete"));
        assert!(code.level2_description.is_none());
    }

    #[test]
    fn missing_records_decode_to_empty_vecs() {
        let result: TrainMessageResult = quick_xml::de::from_str("<RESULT></RESULT>").unwrap();

        assert!(result.train_messages.is_empty());
        assert!(result.info.is_none());
        assert!(result.error.is_none());
    }
}

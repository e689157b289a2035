//! Road data categories.
//!
//! Cameras, ferries, parking, road conditions, traffic situations,
//! traffic flow, safety cameras, travel times and weather stations.
//! Field coverage follows the commonly used parts of each schema.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::common::{ErrorMessage, Geometry, Info};

/// One `<RESULT>` block of a Camera response.
#[derive(Debug, Clone, Deserialize)]
pub struct CameraResult {
    /// The camera records.
    #[serde(rename = "Camera", default)]
    pub cameras: Vec<Camera>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// A road camera publishing still photos.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Camera {
    /// Camera id, e.g. `SE_STA_CAMERA_1`.
    pub id: Option<String>,

    /// Camera name.
    pub name: Option<String>,

    /// What the camera shows.
    pub description: Option<String>,

    /// Camera kind, e.g. `Väglagskamera`.
    #[serde(rename = "Type")]
    pub camera_type: Option<String>,

    /// Whether the camera is in service.
    pub active: Option<bool>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// Compass direction the camera faces, in degrees.
    pub direction: Option<i32>,

    /// Position of the camera.
    pub geometry: Option<Geometry>,

    /// Whether a full-size photo is available.
    pub has_full_size_photo: Option<bool>,

    /// Icon id for map display.
    pub icon_id: Option<String>,

    /// Description of the camera's location.
    pub location: Option<String>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,

    /// When the current photo was taken.
    pub photo_time: Option<DateTime<FixedOffset>>,

    /// URL of the current photo.
    pub photo_url: Option<String>,

    /// Operational status.
    pub status: Option<String>,

    /// Counties the camera lies in.
    #[serde(default)]
    pub county_no: Vec<i32>,
}

/// One `<RESULT>` block of a FerryAnnouncement response.
#[derive(Debug, Clone, Deserialize)]
pub struct FerryAnnouncementResult {
    /// The ferry departure records.
    #[serde(rename = "FerryAnnouncement", default)]
    pub ferry_announcements: Vec<FerryAnnouncement>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// A single ferry departure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FerryAnnouncement {
    /// Announcement id.
    pub id: Option<i64>,

    /// When the ferry leaves.
    pub departure_time: Option<DateTime<FixedOffset>>,

    /// Id of a deviation affecting this departure.
    pub deviation_id: Option<String>,

    /// Harbor the ferry leaves from.
    pub from_harbor: Option<Harbor>,

    /// Harbor the ferry arrives at.
    pub to_harbor: Option<Harbor>,

    /// Free-text notes for the departure.
    #[serde(default)]
    pub info: Vec<String>,

    /// The route this departure belongs to.
    pub route: Option<FerryRouteRef>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// A harbor on a ferry route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Harbor {
    /// Harbor id.
    pub id: Option<i64>,

    /// Harbor name.
    pub name: Option<String>,
}

/// Reference to a ferry route from an announcement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FerryRouteRef {
    /// Route id.
    pub id: Option<i64>,

    /// Route name.
    pub name: Option<String>,

    /// Shortened route name.
    pub shortname: Option<String>,
}

/// One `<RESULT>` block of a FerryRoute response.
#[derive(Debug, Clone, Deserialize)]
pub struct FerryRouteResult {
    /// The ferry route records.
    #[serde(rename = "FerryRoute", default)]
    pub ferry_routes: Vec<FerryRoute>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// A ferry route operated by the road administration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FerryRoute {
    /// Route id.
    pub id: Option<i64>,

    /// Route name, e.g. `Adelsöleden`.
    pub name: Option<String>,

    /// Shortened route name.
    pub shortname: Option<String>,

    /// Route kind.
    #[serde(rename = "Type")]
    pub route_type: Option<String>,

    /// Harbors served by the route.
    #[serde(default)]
    pub harbor: Vec<Harbor>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of an Icon response.
#[derive(Debug, Clone, Deserialize)]
pub struct IconResult {
    /// The icon records.
    #[serde(rename = "Icon", default)]
    pub icons: Vec<Icon>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// A map icon referenced by other categories via `IconId`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Icon {
    /// Icon id, e.g. `roadConditionIcy`.
    pub id: Option<String>,

    /// PNG image data, base64 encoded.
    pub base64: Option<String>,

    /// What the icon depicts.
    pub description: Option<String>,

    /// URL of the image.
    pub url: Option<String>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a Parking response.
#[derive(Debug, Clone, Deserialize)]
pub struct ParkingResult {
    /// The parking-area records.
    #[serde(rename = "Parking", default)]
    pub parkings: Vec<Parking>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// A parking area along the road network.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parking {
    /// Parking area id.
    pub id: Option<String>,

    /// Parking area name.
    pub name: Option<String>,

    /// Description of the area.
    pub description: Option<String>,

    /// Counties the area lies in.
    #[serde(default)]
    pub county_no: Vec<i32>,

    /// Position of the area.
    pub geometry: Option<Geometry>,

    /// Icon id for map display.
    pub icon_id: Option<String>,

    /// Open status, e.g. `open`.
    pub open_status: Option<String>,

    /// Who operates the area.
    pub operator: Option<ParkingOperator>,

    /// Ways to access the area.
    #[serde(default)]
    pub parking_access: Vec<String>,

    /// Photos of the area.
    #[serde(default)]
    pub photo: Vec<ParkingPhoto>,

    /// Intended usage, e.g. `truckParking`.
    #[serde(default)]
    pub usage_scenario: Vec<String>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// Operator contact details for a parking area.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParkingOperator {
    /// Operator name.
    pub name: Option<String>,

    /// Contact details.
    pub contact: Option<String>,
}

/// A photo of a parking area.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParkingPhoto {
    /// Photo caption.
    pub title: Option<String>,

    /// URL of the photo.
    pub url: Option<String>,
}

/// One `<RESULT>` block of a RoadCondition response.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadConditionResult {
    /// The road-condition records.
    #[serde(rename = "RoadCondition", default)]
    pub road_conditions: Vec<RoadCondition>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// Surface condition of a road stretch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoadCondition {
    /// Condition record id.
    pub id: Option<String>,

    /// Numeric condition code.
    pub condition_code: Option<i32>,

    /// Additional condition notes.
    #[serde(default)]
    pub condition_info: Vec<String>,

    /// Condition in text, e.g. `Normalt vinterväglag`.
    pub condition_text: Option<String>,

    /// Counties the stretch lies in.
    #[serde(default)]
    pub county_no: Vec<i32>,

    /// Who reported the condition.
    pub creator: Option<String>,

    /// When the condition stops applying.
    pub end_time: Option<DateTime<FixedOffset>>,

    /// The stretch's geometry.
    pub geometry: Option<Geometry>,

    /// Icon id for map display.
    pub icon_id: Option<String>,

    /// Description of the stretch's location.
    pub location_text: Option<String>,

    /// Road number, e.g. `E4`.
    pub road_number: Option<String>,

    /// Whether the message is safety related.
    pub safety_related_message: Option<bool>,

    /// When the condition started to apply.
    pub start_time: Option<DateTime<FixedOffset>>,

    /// Whether this is a warning.
    pub warning: Option<bool>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a RoadConditionOverview response.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadConditionOverviewResult {
    /// The overview records.
    #[serde(rename = "RoadConditionOverview", default)]
    pub road_condition_overviews: Vec<RoadConditionOverview>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// County-level summary of road conditions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoadConditionOverview {
    /// Overview record id.
    pub id: Option<String>,

    /// Counties the overview covers.
    #[serde(default)]
    pub county_no: Vec<i32>,

    /// When the overview stops applying.
    pub end_time: Option<DateTime<FixedOffset>>,

    /// Area the overview describes.
    pub location_text: Option<String>,

    /// The summary text.
    pub overview_text: Option<String>,

    /// When the overview started to apply.
    pub start_time: Option<DateTime<FixedOffset>>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a Situation response.
#[derive(Debug, Clone, Deserialize)]
pub struct SituationResult {
    /// The situation records.
    #[serde(rename = "Situation", default)]
    pub situations: Vec<Situation>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// A traffic situation: one or more deviations sharing a cause.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Situation {
    /// Situation id.
    pub id: Option<String>,

    /// Country the situation lies in.
    pub country_code: Option<String>,

    /// Counties the situation lies in.
    #[serde(default)]
    pub county_no: Vec<i32>,

    /// The deviations making up the situation.
    #[serde(default)]
    pub deviation: Vec<Deviation>,

    /// When the situation was published.
    pub publication_time: Option<DateTime<FixedOffset>>,

    /// When this version of the situation was issued.
    pub version_time: Option<DateTime<FixedOffset>>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One deviation within a situation, e.g. a road closure or roadworks.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deviation {
    /// Deviation id.
    pub id: Option<String>,

    /// When the deviation was created.
    pub creation_time: Option<DateTime<FixedOffset>>,

    /// When the deviation ends.
    pub end_time: Option<DateTime<FixedOffset>>,

    /// Position of the deviation.
    pub geometry: Option<Geometry>,

    /// Short headline, e.g. `Vägarbete`.
    pub header: Option<String>,

    /// Icon id for map display.
    pub icon_id: Option<String>,

    /// Description of the locations affected.
    pub location_descriptor: Option<String>,

    /// Full message text.
    pub message: Option<String>,

    /// Message classification code.
    pub message_code: Option<String>,

    /// Kind of message, e.g. `Vägarbete`.
    pub message_type: Option<String>,

    /// Road number, e.g. `E6`.
    pub road_number: Option<String>,

    /// Severity as a number, higher is worse.
    pub severity_code: Option<i32>,

    /// Severity in text, e.g. `Stor påverkan`.
    pub severity_text: Option<String>,

    /// When the deviation starts.
    pub start_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a TrafficFlow response.
#[derive(Debug, Clone, Deserialize)]
pub struct TrafficFlowResult {
    /// The flow measurement records.
    #[serde(rename = "TrafficFlow", default)]
    pub traffic_flows: Vec<TrafficFlow>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// A point measurement of traffic flow.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrafficFlow {
    /// Id of the measurement site.
    pub site_id: Option<i64>,

    /// Average speed over the period, km/h.
    pub average_vehicle_speed: Option<f64>,

    /// Counties the site lies in.
    #[serde(default)]
    pub county_no: Vec<i32>,

    /// Position of the site.
    pub geometry: Option<Geometry>,

    /// Length of the measurement period, seconds.
    pub measurement_or_calculation_period: Option<i32>,

    /// Which side of the road is measured.
    pub measurement_side: Option<String>,

    /// When the measurement was taken.
    pub measurement_time: Option<DateTime<FixedOffset>>,

    /// Region id of the site.
    pub region_id: Option<i32>,

    /// The specific lane measured.
    pub specific_lane: Option<String>,

    /// Vehicles per hour.
    pub vehicle_flow_rate: Option<f64>,

    /// Vehicle class measured, e.g. `anyVehicle`.
    pub vehicle_type: Option<String>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a TrafficSafetyCamera response.
#[derive(Debug, Clone, Deserialize)]
pub struct TrafficSafetyCameraResult {
    /// The safety-camera records.
    #[serde(rename = "TrafficSafetyCamera", default)]
    pub traffic_safety_cameras: Vec<TrafficSafetyCamera>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// A speed enforcement camera.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrafficSafetyCamera {
    /// Camera id.
    pub id: Option<String>,

    /// Direction of enforcement, in degrees.
    pub bearing: Option<i32>,

    /// Counties the camera lies in.
    #[serde(default)]
    pub county_no: Vec<i32>,

    /// Position of the camera.
    pub geometry: Option<Geometry>,

    /// Icon id for map display.
    pub icon_id: Option<String>,

    /// Camera name.
    pub name: Option<String>,

    /// Road number, e.g. `E18`.
    pub road_number: Option<String>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a TravelTimeRoute response.
#[derive(Debug, Clone, Deserialize)]
pub struct TravelTimeRouteResult {
    /// The travel-time records.
    #[serde(rename = "TravelTimeRoute", default)]
    pub travel_time_routes: Vec<TravelTimeRoute>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// Measured travel time along a fixed route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TravelTimeRoute {
    /// Route id.
    pub id: Option<String>,

    /// Route name.
    pub name: Option<String>,

    /// Name of the start point.
    pub start_point_name: Option<String>,

    /// Name of the end point.
    pub end_point_name: Option<String>,

    /// Counties the route lies in.
    #[serde(default)]
    pub county_no: Vec<i32>,

    /// The route's geometry.
    pub geometry: Option<Geometry>,

    /// Route length, metres.
    pub length: Option<f64>,

    /// Current travel time, seconds.
    pub travel_time_seconds: Option<i32>,

    /// Travel time without congestion, seconds.
    pub free_flow_travel_time_seconds: Option<i32>,

    /// Typical travel time for the time of day, seconds.
    pub normal_travel_time_seconds: Option<i32>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One `<RESULT>` block of a WeatherStation response.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherStationResult {
    /// The weather-station records.
    #[serde(rename = "WeatherStation", default)]
    pub weather_stations: Vec<WeatherStation>,

    /// Result metadata.
    #[serde(rename = "INFO")]
    pub info: Option<Info>,

    /// Error reported by the service for this query.
    #[serde(rename = "ERROR")]
    pub error: Option<ErrorMessage>,
}

/// A road weather station and its latest measurement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeatherStation {
    /// Station id.
    pub id: Option<String>,

    /// Station name.
    pub name: Option<String>,

    /// Whether the station is in service.
    pub active: Option<bool>,

    /// Counties the station lies in.
    #[serde(default)]
    pub county_no: Vec<i32>,

    /// Position of the station.
    pub geometry: Option<Geometry>,

    /// Icon id for map display.
    pub icon_id: Option<String>,

    /// Latest measurement.
    pub measurement: Option<WeatherMeasurement>,

    /// Road number as a plain number.
    pub road_number_numeric: Option<i32>,

    /// Whether the record has been deleted.
    pub deleted: Option<bool>,

    /// When the record was last changed.
    pub modified_time: Option<DateTime<FixedOffset>>,
}

/// One measurement from a weather station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeatherMeasurement {
    /// Air readings.
    pub air: Option<AirMeasurement>,

    /// When the measurement was taken.
    pub measure_time: Option<DateTime<FixedOffset>>,

    /// Precipitation readings.
    pub precipitation: Option<PrecipitationMeasurement>,

    /// Wind readings.
    pub wind: Option<WindMeasurement>,
}

/// Air readings of a weather measurement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AirMeasurement {
    /// Air temperature, °C.
    pub temp: Option<f64>,

    /// Relative humidity, percent.
    pub relative_humidity: Option<f64>,
}

/// Precipitation readings of a weather measurement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrecipitationMeasurement {
    /// Amount, mm/h.
    pub amount: Option<f64>,

    /// Precipitation kind, e.g. `Regn`.
    #[serde(rename = "Type")]
    pub precipitation_type: Option<String>,
}

/// Wind readings of a weather measurement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WindMeasurement {
    /// Direction the wind comes from, degrees.
    pub direction: Option<i32>,

    /// Direction in text, e.g. `Nordväst`.
    pub direction_text: Option<String>,

    /// Mean wind speed, m/s.
    pub force: Option<f64>,

    /// Gust speed, m/s.
    pub force_max: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_camera_result() {
        let xml = r#"<RESULT>
            <Camera>
                <Id>SE_STA_CAMERA_1</Id>
                <Name>Rödbo norra</Name>
                <Type>Väglagskamera</Type>
                <Active>true</Active>
                <Direction>180</Direction>
                <HasFullSizePhoto>true</HasFullSizePhoto>
                <PhotoTime>2024-03-15T10:40:00.000+01:00</PhotoTime>
                <PhotoUrl>https://api.trafikinfo.trafikverket.se/v2/Images/photo_1</PhotoUrl>
                <CountyNo>14</CountyNo>
                <Geometry>
                    <WGS84>POINT (11.971146 57.793236)</WGS84>
                </Geometry>
            </Camera>
        </RESULT>"#;

        let result: CameraResult = quick_xml::de::from_str(xml).unwrap();

        let camera = &result.cameras[0];
        assert_eq!(camera.id.as_deref(), Some("SE_STA_CAMERA_1"));
        assert_eq!(camera.camera_type.as_deref(), Some("Väglagskamera"));
        assert_eq!(camera.active, Some(true));
        assert_eq!(camera.direction, Some(180));
        assert_eq!(camera.county_no, vec![14]);
        assert!(camera.photo_url.as_deref().unwrap().starts_with("https://"));
    }

    #[test]
    fn deserialize_situation_with_deviations() {
        let xml = r#"<RESULT>
            <Situation>
                <Id>SE_STA_TRISSID_1_12345</Id>
                <PublicationTime>2024-03-15T06:00:00.000+01:00</PublicationTime>
                <CountyNo>1</CountyNo>
                <Deviation>
                    <Id>SE_STA_TRISSID_1_12345_1</Id>
                    <Header>Vägarbete</Header>
                    <MessageType>Vägarbete</MessageType>
                    <Message>Körfält avstängt för beläggningsarbete.</Message>
                    <RoadNumber>E4</RoadNumber>
                    <SeverityCode>2</SeverityCode>
                    <SeverityText>Liten påverkan</SeverityText>
                    <StartTime>2024-03-15T07:00:00.000+01:00</StartTime>
                    <EndTime>2024-03-22T16:00:00.000+01:00</EndTime>
                </Deviation>
                <Deviation>
                    <Id>SE_STA_TRISSID_1_12345_2</Id>
                    <MessageType>Begränsad framkomlighet</MessageType>
                </Deviation>
            </Situation>
        </RESULT>"#;

        let result: SituationResult = quick_xml::de::from_str(xml).unwrap();

        let situation = &result.situations[0];
        assert_eq!(situation.deviation.len(), 2);
        assert_eq!(situation.deviation[0].road_number.as_deref(), Some("E4"));
        assert_eq!(situation.deviation[0].severity_code, Some(2));
        assert_eq!(
            situation.deviation[1].message_type.as_deref(),
            Some("Begränsad framkomlighet")
        );
    }

    #[test]
    fn deserialize_weather_station_measurement() {
        let xml = r#"<RESULT>
            <WeatherStation>
                <Id>SE_STA_VVIS201</Id>
                <Name>Öxnered</Name>
                <Active>true</Active>
                <Measurement>
                    <MeasureTime>2024-03-15T10:30:01.000+01:00</MeasureTime>
                    <Air>
                        <Temp>-2.4</Temp>
                        <RelativeHumidity>91</RelativeHumidity>
                    </Air>
                    <Wind>
                        <Direction>270</Direction>
                        <DirectionText>Väst</DirectionText>
                        <Force>4.8</Force>
                        <ForceMax>8.1</ForceMax>
                    </Wind>
                </Measurement>
            </WeatherStation>
        </RESULT>"#;

        let result: WeatherStationResult = quick_xml::de::from_str(xml).unwrap();

        let station = &result.weather_stations[0];
        let measurement = station.measurement.as_ref().unwrap();
        assert_eq!(measurement.air.as_ref().unwrap().temp, Some(-2.4));
        assert_eq!(measurement.wind.as_ref().unwrap().direction, Some(270));
        assert!(measurement.precipitation.is_none());
    }

    #[test]
    fn deserialize_ferry_announcement() {
        let xml = r#"<RESULT>
            <FerryAnnouncement>
                <Id>31415</Id>
                <DepartureTime>2024-03-15T11:10:00.000+01:00</DepartureTime>
                <FromHarbor>
                    <Id>1</Id>
                    <Name>Adelsö</Name>
                </FromHarbor>
                <ToHarbor>
                    <Id>2</Id>
                    <Name>Munsö</Name>
                </ToHarbor>
                <Route>
                    <Id>38</Id>
                    <Name>Adelsöleden</Name>
                </Route>
                <Info>Avgången kan ställas in vid hård vind.</Info>
            </FerryAnnouncement>
        </RESULT>"#;

        let result: FerryAnnouncementResult = quick_xml::de::from_str(xml).unwrap();

        let announcement = &result.ferry_announcements[0];
        assert_eq!(announcement.id, Some(31415));
        assert_eq!(
            announcement.from_harbor.as_ref().unwrap().name.as_deref(),
            Some("Adelsö")
        );
        assert_eq!(
            announcement.route.as_ref().unwrap().name.as_deref(),
            Some("Adelsöleden")
        );
        assert_eq!(announcement.info.len(), 1);
    }

    #[test]
    fn deserialize_travel_time_route() {
        let xml = r#"<RESULT>
            <TravelTimeRoute>
                <Id>20</Id>
                <Name>Essingeleden Norrut</Name>
                <StartPointName>Nybohov</StartPointName>
                <EndPointName>Tomteboda</EndPointName>
                <Length>7000</Length>
                <TravelTimeSeconds>620</TravelTimeSeconds>
                <FreeFlowTravelTimeSeconds>380</FreeFlowTravelTimeSeconds>
            </TravelTimeRoute>
        </RESULT>"#;

        let result: TravelTimeRouteResult = quick_xml::de::from_str(xml).unwrap();

        let route = &result.travel_time_routes[0];
        assert_eq!(route.name.as_deref(), Some("Essingeleden Norrut"));
        assert_eq!(route.travel_time_seconds, Some(620));
        assert_eq!(route.free_flow_travel_time_seconds, Some(380));
    }

    #[test]
    fn service_error_block_is_exposed() {
        let xml = r#"<RESULT>
            <ERROR>
                <SOURCE>Security</SOURCE>
                <MESSAGE>Invalid authentication</MESSAGE>
            </ERROR>
        </RESULT>"#;

        let result: CameraResult = quick_xml::de::from_str(xml).unwrap();

        assert!(result.cameras.is_empty());
        let error = result.error.unwrap();
        assert_eq!(error.source.as_deref(), Some("Security"));
    }
}

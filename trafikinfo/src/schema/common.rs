//! Response content shared by every data category.
//!
//! Each `<RESULT>` block can carry an `<INFO>` metadata block and an
//! `<ERROR>` block alongside its records; geometry values appear as WKT
//! strings in two coordinate reference systems. These shapes are the
//! same across all schemas.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Coordinates of a record, as WKT strings in the service's two
/// reference systems.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// Projected coordinates (SWEREF 99 TM), e.g. `POINT (674130 6579684)`.
    #[serde(rename = "SWEREF99TM")]
    pub sweref99tm: Option<String>,

    /// Geodetic coordinates (WGS 84), e.g. `POINT (18.06 59.33)`.
    #[serde(rename = "WGS84")]
    pub wgs84: Option<String>,
}

/// Metadata block of a `<RESULT>`.
#[derive(Debug, Clone, Deserialize)]
pub struct Info {
    /// When the category's data last changed, per the service.
    #[serde(rename = "LASTMODIFIED")]
    pub last_modified: Option<LastModified>,

    /// Change id to pass back via the `changeid` query attribute for
    /// incremental queries.
    #[serde(rename = "LASTCHANGEID")]
    pub last_change_id: Option<String>,

    /// Server-sent-events endpoint for this query, present when the
    /// query asked for one.
    #[serde(rename = "SSEURL")]
    pub sse_url: Option<String>,
}

/// The `<LASTMODIFIED datetime="…" />` element of an `<INFO>` block.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LastModified {
    /// Modification instant, with the service's UTC offset.
    #[serde(rename = "@datetime")]
    pub datetime: Option<DateTime<FixedOffset>>,
}

/// Error reported by the service inside an otherwise well-formed
/// response, e.g. for an invalid API key or a malformed filter.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMessage {
    /// Subsystem that raised the error.
    #[serde(rename = "SOURCE")]
    pub source: Option<String>,

    /// Human-readable error text.
    #[serde(rename = "MESSAGE")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_geometry() {
        let xml = r#"<Geometry>
            <SWEREF99TM>POINT (674130.17 6579684.07)</SWEREF99TM>
            <WGS84>POINT (18.05697 59.32764)</WGS84>
        </Geometry>"#;

        let geometry: Geometry = quick_xml::de::from_str(xml).unwrap();

        assert_eq!(
            geometry.sweref99tm.as_deref(),
            Some("POINT (674130.17 6579684.07)")
        );
        assert_eq!(geometry.wgs84.as_deref(), Some("POINT (18.05697 59.32764)"));
    }

    #[test]
    fn deserialize_info_block() {
        let xml = r#"<INFO>
            <LASTMODIFIED datetime="2023-04-05T10:15:30.000+02:00" />
            <LASTCHANGEID>6792179764249351234</LASTCHANGEID>
        </INFO>"#;

        let info: Info = quick_xml::de::from_str(xml).unwrap();

        let datetime = info.last_modified.unwrap().datetime.unwrap();
        assert_eq!(datetime.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(info.last_change_id.as_deref(), Some("6792179764249351234"));
        assert!(info.sse_url.is_none());
    }

    #[test]
    fn deserialize_error_block() {
        let xml = r#"<ERROR>
            <SOURCE>Security</SOURCE>
            <MESSAGE>Invalid login information</MESSAGE>
        </ERROR>"#;

        let error: ErrorMessage = quick_xml::de::from_str(xml).unwrap();

        assert_eq!(error.source.as_deref(), Some("Security"));
        assert_eq!(error.message.as_deref(), Some("Invalid login information"));
    }

    #[test]
    fn last_modified_without_datetime_attribute() {
        let lm: LastModified = quick_xml::de::from_str("<LASTMODIFIED />").unwrap();
        assert!(lm.datetime.is_none());
    }
}

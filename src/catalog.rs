use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// One raw catalog row, as delivered by the retrieval layer.
///
/// Field names follow the USGS FDSN event CSV (`time,mag,latitude,longitude`);
/// any extra columns in the source table are ignored on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub time: String,
    #[serde(rename = "mag")]
    pub magnitude: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Deserialize a CSV catalog from any reader. The header row is required.
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<CatalogRecord>, PricingError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

/// Serialize a catalog as CSV with the USGS column naming.
pub fn write_catalog<W: Write>(
    writer: W,
    records: &[CatalogRecord],
) -> Result<(), PricingError> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_minimal_catalog() {
        let csv = "time,mag,latitude,longitude\n\
                   2020-01-15T10:00:00.000Z,5.2,35.1,25.3\n\
                   2021-03-02T04:30:00.000Z,6.8,35.6,25.9\n";
        let records = read_catalog(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].magnitude, 5.2);
        assert_eq!(records[1].time, "2021-03-02T04:30:00.000Z");
    }

    #[test]
    fn extra_usgs_columns_are_ignored() {
        // Column order and surplus fields as in the real FDSN export.
        let csv = "time,latitude,longitude,depth,mag,magType,place\n\
                   2019-07-06T03:19:53.040Z,35.7695,-117.5993,8.0,7.1,mw,\"Ridgecrest, CA\"\n";
        let records = read_catalog(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].magnitude, 7.1);
        assert_eq!(records[0].latitude, 35.7695);
    }

    #[test]
    fn non_numeric_magnitude_is_an_error() {
        let csv = "time,mag,latitude,longitude\n2020-01-01T00:00:00Z,strong,35.0,25.0\n";
        assert!(matches!(
            read_catalog(csv.as_bytes()).unwrap_err(),
            PricingError::Csv(_)
        ));
    }

    #[test]
    fn write_then_read_preserves_records() {
        let records = vec![
            CatalogRecord {
                time: "2020-06-01T12:00:00.000Z".to_string(),
                magnitude: 4.9,
                latitude: 35.025,
                longitude: 25.763,
            },
            CatalogRecord {
                time: "2021-02-11T23:59:59.000Z".to_string(),
                magnitude: 6.1,
                latitude: 34.8,
                longitude: 26.1,
            },
        ];
        let mut buf: Vec<u8> = Vec::new();
        write_catalog(&mut buf, &records).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("time,mag,latitude,longitude"));
        assert_eq!(read_catalog(buf.as_slice()).unwrap(), records);
    }
}

//! Result of one decoding pass

use crate::io::shp::{DecodedRecord, ShpHeader};
use crate::notification::NotificationCollection;
use crate::types::BoundingBox2D;

/// A decoded shapefile: the header, the records in file order, and the
/// diagnostics collected on the way. Null records are not included.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub header: ShpHeader,
    pub records: Vec<DecodedRecord>,
    pub notifications: NotificationCollection,
}

impl Dataset {
    pub fn new(
        header: ShpHeader,
        records: Vec<DecodedRecord>,
        notifications: NotificationCollection,
    ) -> Self {
        Self {
            header,
            records,
            notifications,
        }
    }

    pub fn header(&self) -> &ShpHeader {
        &self.header
    }

    pub fn records(&self) -> &[DecodedRecord] {
        &self.records
    }

    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecodedRecord> {
        self.records.iter()
    }

    /// Text form of every record that decoded to a geometry.
    pub fn wkt_strings(&self) -> impl Iterator<Item = &str> {
        self.records.iter().filter_map(DecodedRecord::wkt)
    }

    /// Envelope of all record envelopes, computed from the records rather
    /// than taken from the header.
    pub fn bounding_box(&self) -> Option<BoundingBox2D> {
        self.records
            .iter()
            .filter_map(DecodedRecord::bounding_box)
            .reduce(|acc, b| acc.merge(&b))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DecodedRecord;
    type IntoIter = std::slice::Iter<'a, DecodedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Dataset {
    type Item = DecodedRecord;
    type IntoIter = std::vec::IntoIter<DecodedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

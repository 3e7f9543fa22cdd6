//! Shapefile reader session

use super::byte_reader::ByteReader;
use super::header::{ShpHeader, FILE_CODE, FILE_VERSION, HEADER_LENGTH};
use super::record::{
    read_record_body, DecodedRecord, RecordHeader, RECORD_HEADER_LENGTH, SHAPE_TYPE_LENGTH,
};
use crate::dataset::Dataset;
use crate::error::{Result, ShpError};
use crate::notification::{NotificationCollection, NotificationType};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Configuration for the shapefile reader.
#[derive(Debug, Clone, Default)]
pub struct ShpReaderConfiguration {
    /// When `true`, a malformed record is reported as a notification and
    /// decoding resumes at the next record; a truncated record ends the
    /// read with the records decoded so far.
    ///
    /// Default: `false` (strict mode, errors propagate).
    pub failsafe: bool,
}

/// Shapefile (`.shp`) reader.
///
/// The header is decoded when the reader is created. Records are then
/// decoded in file order, either all at once with [`read`](Self::read) or
/// one at a time with [`next_record`](Self::next_record). Every record
/// boundary is a safe place to stop.
pub struct ShpReader {
    reader: ByteReader<Vec<u8>>,
    header: ShpHeader,
    config: ShpReaderConfiguration,
    notifications: NotificationCollection,
    finished: bool,
}

impl ShpReader {
    /// Create a reader over an in-memory `.shp` image.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let mut reader = ByteReader::new(data);
        let header = ShpHeader::read(&mut reader)?;
        let notifications = check_header(&header, reader.len());

        Ok(Self {
            reader,
            header,
            config: ShpReaderConfiguration::default(),
            notifications,
            finished: false,
        })
    }

    /// Create a reader from any byte source, reading it to the end.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create a reader from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: ShpReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    pub fn header(&self) -> &ShpHeader {
        &self.header
    }

    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// Byte offset of the next record.
    pub fn position(&self) -> u64 {
        self.reader.position()
    }

    /// Decode the next non-null record.
    ///
    /// Returns `Ok(None)` at end of stream. Records of unsupported shape
    /// types are returned without a geometry. After an error the cursor is
    /// already at the next record boundary (or the stream is finished for
    /// truncation), so the caller may keep calling.
    pub fn next_record(&mut self) -> Result<Option<DecodedRecord>> {
        loop {
            if self.finished || self.reader.at_end() {
                return Ok(None);
            }

            let start = self.reader.position();
            let header = match self.read_record_header(start) {
                Ok(header) => header,
                Err(e) => return self.stop_truncated(start, e),
            };
            let record_end = start + header.span();

            let result = read_record_body(&mut self.reader, header);
            self.reader.seek(record_end)?;

            match result {
                Ok(record) => {
                    if let Some(record) = self.accept(record) {
                        return Ok(Some(record));
                    }
                }
                Err(e) => self.recover(header.record_number, e)?,
            }
        }
    }

    /// Decode all remaining records into a [`Dataset`].
    pub fn read(mut self) -> Result<Dataset> {
        let mut records = Vec::new();
        while let Some(record) = self.next_record()? {
            records.push(record);
        }
        log::debug!("decoded {} records", records.len());
        Ok(Dataset::new(self.header, records, self.notifications))
    }

    /// Decode all remaining records with record bodies spread over the
    /// rayon thread pool.
    ///
    /// Record offsets are found first by walking the content lengths, then
    /// each body is decoded from its own slice. The result is the same as
    /// [`read`](Self::read), in file order. In strict mode that includes
    /// the error: a body that fails before a truncated tail is reported
    /// ahead of the truncation.
    pub fn read_parallel(mut self) -> Result<Dataset> {
        let mut spans = Vec::new();
        let mut truncation = None;
        while !self.finished && !self.reader.at_end() {
            let start = self.reader.position();
            match self.read_record_header(start) {
                Ok(header) => {
                    spans.push((start, header));
                    self.reader.seek(start + header.span())?;
                }
                Err(e) if !self.config.failsafe => {
                    self.finished = true;
                    truncation = Some(e);
                }
                Err(e) => {
                    self.stop_truncated::<()>(start, e)?;
                }
            }
        }

        let data = self.reader.get_ref().as_slice();
        let results: Vec<(RecordHeader, Result<DecodedRecord>)> = spans
            .par_iter()
            .map(|&(start, header)| {
                let end = (start + header.span()) as usize;
                let body_start =
                    ((start + RECORD_HEADER_LENGTH + SHAPE_TYPE_LENGTH) as usize).min(end);
                let mut body = ByteReader::new(&data[body_start..end]);
                (header, read_record_body(&mut body, header))
            })
            .collect();

        let mut records = Vec::with_capacity(results.len());
        for (header, result) in results {
            match result {
                Ok(record) => records.extend(self.accept(record)),
                Err(e) => self.recover(header.record_number, e)?,
            }
        }
        if let Some(e) = truncation {
            return Err(e);
        }
        log::debug!("decoded {} records in parallel", records.len());
        Ok(Dataset::new(self.header, records, self.notifications))
    }

    /// Read a record header and check its span fits in the stream.
    fn read_record_header(&mut self, start: u64) -> Result<RecordHeader> {
        let header = RecordHeader::read(&mut self.reader)?;
        let available = self.reader.len() - start;
        if header.span() > available {
            return Err(ShpError::UnexpectedEndOfData {
                offset: start,
                needed: header.span() as usize,
                available: available as usize,
            });
        }
        Ok(header)
    }

    /// Drop null records and note unsupported ones.
    fn accept(&mut self, record: DecodedRecord) -> Option<DecodedRecord> {
        if record.is_null() {
            return None;
        }
        if !record.is_supported() {
            log::warn!(
                "record {}: shape type {} not supported, skipped",
                record.record_number(),
                record.shape_type()
            );
            self.notifications.notify_record(
                NotificationType::NotSupported,
                record.record_number(),
                ShpError::UnsupportedShapeType(record.shape_type().code()).to_string(),
            );
        }
        Some(record)
    }

    /// A record whose span is known failed to decode.
    fn recover(&mut self, record_number: i32, error: ShpError) -> Result<()> {
        if !self.config.failsafe {
            return Err(error);
        }
        log::warn!("record {}: {}, skipped", record_number, error);
        self.notifications
            .notify_record(NotificationType::Error, record_number, error.to_string());
        Ok(())
    }

    /// No further record boundary can be trusted.
    fn stop_truncated<T>(&mut self, start: u64, error: ShpError) -> Result<Option<T>> {
        self.finished = true;
        if !self.config.failsafe {
            return Err(error);
        }
        log::warn!("truncated record at offset {}: {}", start, error);
        self.notifications.notify(
            NotificationType::Error,
            format!("decoding stopped at offset {}: {}", start, error),
        );
        Ok(None)
    }
}

impl Iterator for ShpReader {
    type Item = Result<DecodedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

fn check_header(header: &ShpHeader, stream_len: u64) -> NotificationCollection {
    let mut notifications = NotificationCollection::new();

    if header.file_code != FILE_CODE {
        log::warn!("unexpected file code {}", header.file_code);
        notifications.notify(
            NotificationType::Warning,
            format!("file code is {}, expected {}", header.file_code, FILE_CODE),
        );
    }
    if header.version != FILE_VERSION {
        log::warn!("unexpected version {}", header.version);
        notifications.notify(
            NotificationType::Warning,
            format!("version is {}, expected {}", header.version, FILE_VERSION),
        );
    }
    if header.file_length_bytes() != stream_len {
        log::warn!(
            "header declares {} bytes, stream has {}",
            header.file_length_bytes(),
            stream_len
        );
        notifications.notify(
            NotificationType::Warning,
            format!(
                "header declares {} bytes, stream has {}",
                header.file_length_bytes(),
                stream_len
            ),
        );
    }
    if stream_len == HEADER_LENGTH {
        log::debug!("shp file has no records");
    }

    notifications
}

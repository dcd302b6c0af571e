// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Native strata recording format (.strata)
//!
//! # Format Overview
//!
//! ```text
//! +---------------------------------------------------------+
//! |                 File Header (64 bytes)                  |
//! |  Magic (8) | Version (4) | Flags (4) | MetaOffset (8)   |
//! |  MetaSize (4) | MsgCount (8) | Duration (8) | Reserved  |
//! +---------------------------------------------------------+
//! |                    Record 0                             |
//! |  BodyLen (4) | CRC32 (4) | Body (var)                   |
//! +---------------------------------------------------------+
//! |                    Record 1                             |
//! |  ...                                                    |
//! +---------------------------------------------------------+
//! |                 Metadata (JSON trailer)                 |
//! +---------------------------------------------------------+
//! ```
//!
//! # Record Body
//!
//! ```text
//! timestamp (8) | path_len (2) | path | archetype_len (2) | archetype |
//! batch_count (2) | batches...
//!
//! batch: field_len (2) | field | type_len (2) | type |
//!        num_instances (4) | value_ends (4 * n) |
//!        payload_len (4) | payload
//! ```
//!
//! All integers little-endian. Batches are stored in wire order (declared
//! field order, indicator last) exactly as the serializer emitted them.

use super::{RecordedBatch, RecordedMessage, RecordingMetadata};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;
use thiserror::Error;

/// Magic bytes: "STRATAR\0"
pub const MAGIC: [u8; 8] = [0x53, 0x54, 0x52, 0x41, 0x54, 0x41, 0x52, 0x00];

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// File header (64 bytes, fixed).
#[derive(Debug, Clone)]
pub struct FileHeader {
    /// Magic bytes (8).
    pub magic: [u8; 8],
    /// Format version (4).
    pub version: u32,
    /// Flags (4) - reserved.
    pub flags: u32,
    /// Metadata JSON offset (8).
    pub metadata_offset: u64,
    /// Metadata JSON size (4).
    pub metadata_size: u32,
    /// Total message count (8).
    pub message_count: u64,
    /// Recording duration in nanos (8).
    pub duration_nanos: u64,
    /// Reserved (20) - padding to 64 bytes.
    pub reserved: [u8; 20],
}

impl FileHeader {
    pub const SIZE: usize = 64;

    pub fn new() -> Self {
        Self {
            magic: MAGIC,
            version: FORMAT_VERSION,
            flags: 0,
            metadata_offset: 0,
            metadata_size: 0,
            message_count: 0,
            duration_nanos: 0,
            reserved: [0u8; 20],
        }
    }

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.magic)?;
        w.write_u32::<LittleEndian>(self.version)?;
        w.write_u32::<LittleEndian>(self.flags)?;
        w.write_u64::<LittleEndian>(self.metadata_offset)?;
        w.write_u32::<LittleEndian>(self.metadata_size)?;
        w.write_u64::<LittleEndian>(self.message_count)?;
        w.write_u64::<LittleEndian>(self.duration_nanos)?;
        w.write_all(&self.reserved)?;
        Ok(())
    }

    pub fn read<R: Read>(r: &mut R) -> Result<Self, FormatError> {
        let mut magic = [0u8; 8];
        r.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(FormatError::InvalidMagic);
        }

        let version = r.read_u32::<LittleEndian>()?;
        if version != FORMAT_VERSION {
            return Err(FormatError::VersionMismatch {
                expected: FORMAT_VERSION,
                got: version,
            });
        }

        let flags = r.read_u32::<LittleEndian>()?;
        let metadata_offset = r.read_u64::<LittleEndian>()?;
        let metadata_size = r.read_u32::<LittleEndian>()?;
        let message_count = r.read_u64::<LittleEndian>()?;
        let duration_nanos = r.read_u64::<LittleEndian>()?;
        let mut reserved = [0u8; 20];
        r.read_exact(&mut reserved)?;

        Ok(Self {
            magic,
            version,
            flags,
            metadata_offset,
            metadata_size,
            message_count,
            duration_nanos,
            reserved,
        })
    }
}

impl Default for FileHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Strata format errors.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid strata file magic")]
    InvalidMagic,

    #[error("Version mismatch: expected {expected}, got {got}")]
    VersionMismatch { expected: u32, got: u32 },

    #[error("CRC mismatch in record {index}")]
    CrcMismatch { index: u64 },

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn write_str_u16<W: Write>(w: &mut W, s: &str) -> Result<(), FormatError> {
    let len = u16::try_from(s.len())
        .map_err(|_| FormatError::InvalidFormat(format!("name too long: {} bytes", s.len())))?;
    w.write_u16::<LittleEndian>(len)?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

fn read_str_u16<R: Read>(r: &mut R) -> Result<String, FormatError> {
    let len = r.read_u16::<LittleEndian>()? as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|e| FormatError::InvalidFormat(e.to_string()))
}

fn encode_body(msg: &RecordedMessage) -> Result<Vec<u8>, FormatError> {
    let mut body = Vec::with_capacity(64 + msg.payload_bytes());
    body.write_u64::<LittleEndian>(msg.timestamp_nanos)?;
    write_str_u16(&mut body, &msg.entity_path)?;
    write_str_u16(&mut body, &msg.archetype)?;

    let count = u16::try_from(msg.batches.len())
        .map_err(|_| FormatError::InvalidFormat(format!("too many batches: {}", msg.batches.len())))?;
    body.write_u16::<LittleEndian>(count)?;

    for batch in &msg.batches {
        write_str_u16(&mut body, &batch.field)?;
        write_str_u16(&mut body, &batch.component_type)?;
        body.write_u32::<LittleEndian>(batch.value_ends.len() as u32)?;
        for &end in &batch.value_ends {
            body.write_u32::<LittleEndian>(end)?;
        }
        body.write_u32::<LittleEndian>(batch.payload.len() as u32)?;
        body.write_all(&batch.payload)?;
    }
    Ok(body)
}

fn decode_body(body: &[u8]) -> Result<RecordedMessage, FormatError> {
    let mut r = body;
    let timestamp_nanos = r.read_u64::<LittleEndian>()?;
    let entity_path = read_str_u16(&mut r)?;
    let archetype = read_str_u16(&mut r)?;

    let count = r.read_u16::<LittleEndian>()? as usize;
    let mut batches = Vec::with_capacity(count);
    for _ in 0..count {
        let field = read_str_u16(&mut r)?;
        let component_type = read_str_u16(&mut r)?;

        let num_instances = r.read_u32::<LittleEndian>()? as usize;
        let mut value_ends = Vec::with_capacity(num_instances);
        for _ in 0..num_instances {
            value_ends.push(r.read_u32::<LittleEndian>()?);
        }

        let payload_len = r.read_u32::<LittleEndian>()? as usize;
        let mut payload = vec![0u8; payload_len];
        r.read_exact(&mut payload)?;

        batches.push(RecordedBatch {
            field,
            component_type,
            value_ends,
            payload,
        });
    }

    Ok(RecordedMessage {
        timestamp_nanos,
        entity_path,
        archetype,
        batches,
    })
}

/// Strata file writer.
pub struct StrataWriter {
    writer: BufWriter<File>,
    header: FileHeader,
    metadata: RecordingMetadata,
    first_timestamp: Option<u64>,
    last_timestamp: u64,
}

impl StrataWriter {
    /// Create a new recording file, reserving the header.
    pub fn create<P: AsRef<Path>>(
        path: P,
        metadata: RecordingMetadata,
    ) -> Result<Self, FormatError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let header = FileHeader::new();
        header.write(&mut writer)?;

        Ok(Self {
            writer,
            header,
            metadata,
            first_timestamp: None,
            last_timestamp: 0,
        })
    }

    /// Append one record.
    pub fn write_message(&mut self, msg: &RecordedMessage) -> Result<(), FormatError> {
        let body = encode_body(msg)?;
        let crc = crc32fast::hash(&body);

        self.writer.write_u32::<LittleEndian>(body.len() as u32)?;
        self.writer.write_u32::<LittleEndian>(crc)?;
        self.writer.write_all(&body)?;

        self.header.message_count += 1;
        if self.first_timestamp.is_none() {
            self.first_timestamp = Some(msg.timestamp_nanos);
        }
        self.last_timestamp = self.last_timestamp.max(msg.timestamp_nanos);
        Ok(())
    }

    /// Mutable access to the metadata written at finalize time.
    pub fn metadata_mut(&mut self) -> &mut RecordingMetadata {
        &mut self.metadata
    }

    /// Messages written so far.
    pub fn message_count(&self) -> u64 {
        self.header.message_count
    }

    /// Write the metadata trailer and the final header.
    pub fn finalize(mut self) -> Result<(), FormatError> {
        let metadata_offset = self.writer.stream_position()?;
        let json = serde_json::to_vec(&self.metadata)?;
        self.writer.write_all(&json)?;

        self.header.metadata_offset = metadata_offset;
        self.header.metadata_size = json.len() as u32;
        self.header.duration_nanos = self
            .last_timestamp
            .saturating_sub(self.first_timestamp.unwrap_or(0));

        self.writer.seek(SeekFrom::Start(0))?;
        self.header.write(&mut self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Strata file reader.
///
/// Validates the header on open and each record's CRC while iterating.
pub struct StrataReader {
    reader: BufReader<File>,
    header: FileHeader,
    metadata: RecordingMetadata,
    position: u64,
    next_index: u64,
}

impl StrataReader {
    /// Open a finalized recording file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FormatError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let header = FileHeader::read(&mut reader)?;

        // Metadata trailer, then rewind to the first record.
        reader.seek(SeekFrom::Start(header.metadata_offset))?;
        let mut json = vec![0u8; header.metadata_size as usize];
        reader.read_exact(&mut json)?;
        let metadata: RecordingMetadata = serde_json::from_slice(&json)?;

        reader.seek(SeekFrom::Start(FileHeader::SIZE as u64))?;

        Ok(Self {
            reader,
            header,
            metadata,
            position: FileHeader::SIZE as u64,
            next_index: 0,
        })
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn metadata(&self) -> &RecordingMetadata {
        &self.metadata
    }

    /// Read the next record, or `None` at the end of the data section.
    pub fn read_message(&mut self) -> Result<Option<RecordedMessage>, FormatError> {
        if self.position >= self.header.metadata_offset {
            return Ok(None);
        }

        let body_len = self.reader.read_u32::<LittleEndian>()? as usize;
        let expected_crc = self.reader.read_u32::<LittleEndian>()?;
        let mut body = vec![0u8; body_len];
        self.reader.read_exact(&mut body)?;

        if crc32fast::hash(&body) != expected_crc {
            return Err(FormatError::CrcMismatch {
                index: self.next_index,
            });
        }

        self.position += 8 + body_len as u64;
        self.next_index += 1;
        decode_body(&body).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_message(timestamp: u64) -> RecordedMessage {
        RecordedMessage {
            timestamp_nanos: timestamp,
            entity_path: "/points".into(),
            archetype: "strata.archetypes.Points3D".into(),
            batches: vec![
                RecordedBatch {
                    field: "positions".into(),
                    component_type: "strata.components.Position3D".into(),
                    value_ends: vec![12, 24],
                    payload: vec![0u8; 24],
                },
                RecordedBatch {
                    field: "indicator".into(),
                    component_type: "strata.indicator.Points3D".into(),
                    value_ends: Vec::new(),
                    payload: Vec::new(),
                },
            ],
        }
    }

    #[test]
    fn test_body_roundtrip() {
        let msg = test_message(1_000);
        let body = encode_body(&msg).expect("encode");
        let decoded = decode_body(&body).expect("decode");
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_header_roundtrip() {
        let mut header = FileHeader::new();
        header.message_count = 7;
        header.metadata_offset = 1234;
        header.metadata_size = 56;

        let mut buf = Vec::new();
        header.write(&mut buf).expect("write");
        assert_eq!(buf.len(), FileHeader::SIZE);

        let decoded = FileHeader::read(&mut buf.as_slice()).expect("read");
        assert_eq!(decoded.message_count, 7);
        assert_eq!(decoded.metadata_offset, 1234);
        assert_eq!(decoded.metadata_size, 56);
    }

    #[test]
    fn test_header_rejects_bad_magic() {
        let mut buf = vec![0u8; FileHeader::SIZE];
        buf[0..8].copy_from_slice(b"NOTSTRAT");
        match FileHeader::read(&mut buf.as_slice()) {
            Err(FormatError::InvalidMagic) => {}
            other => panic!("expected InvalidMagic, got {:?}", other),
        }
    }

    #[test]
    fn test_header_rejects_future_version() {
        let mut header = FileHeader::new();
        header.version = FORMAT_VERSION + 1;
        let mut buf = Vec::new();
        header.write(&mut buf).expect("write");

        match FileHeader::read(&mut buf.as_slice()) {
            Err(FormatError::VersionMismatch { expected, got }) => {
                assert_eq!(expected, FORMAT_VERSION);
                assert_eq!(got, FORMAT_VERSION + 1);
            }
            other => panic!("expected VersionMismatch, got {:?}", other),
        }
    }
}

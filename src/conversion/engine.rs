//! Per-file charset transcoding

use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use encoding_rs::{CoderResult, Encoding};

use crate::fs::FileSystem;

/// Read chunk size in bytes
const CHUNK_SIZE: usize = 4096;

/// Byte counts and fidelity information for one converted file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscodeStats {
    pub bytes_read: u64,
    pub bytes_written: u64,
    /// Malformed input sequences were replaced with U+FFFD
    pub lossy: bool,
}

/// Converts a single file from the source charset to UTF-8.
///
/// The decoder is stateful: a multi-byte sequence split across two read
/// chunks is carried over and decoded correctly once the rest arrives.
pub struct ConversionEngine<'a> {
    fs: &'a dyn FileSystem,
    charset: &'static Encoding,
    chunk_size: usize,
}

impl<'a> ConversionEngine<'a> {
    pub fn new(fs: &'a dyn FileSystem, charset: &'static Encoding) -> Self {
        Self {
            fs,
            charset,
            chunk_size: CHUNK_SIZE,
        }
    }

    /// Override the read chunk size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Transcode `input` into `output` as raw UTF-8 bytes.
    ///
    /// Both streams are scoped to this call and released on every exit path.
    pub fn convert_file(&self, input: &Path, output: &Path) -> io::Result<TranscodeStats> {
        let mut reader = self.fs.open(input)?;
        let mut writer = BufWriter::new(self.fs.create(output)?);
        let stats = self.transcode(reader.as_mut(), &mut writer)?;
        writer.flush()?;
        Ok(stats)
    }

    fn transcode(
        &self,
        reader: &mut dyn Read,
        writer: &mut dyn Write,
    ) -> io::Result<TranscodeStats> {
        let mut decoder = self.charset.new_decoder();
        let mut chunk = vec![0u8; self.chunk_size];
        // decode_to_string writes into the string's spare capacity
        let mut decoded = String::with_capacity(
            decoder
                .max_utf8_buffer_length(self.chunk_size)
                .unwrap_or(self.chunk_size * 4),
        );
        let mut stats = TranscodeStats::default();

        loop {
            let n = loop {
                match reader.read(&mut chunk) {
                    Ok(n) => break n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            };
            let last = n == 0;
            stats.bytes_read += n as u64;

            let mut offset = 0;
            loop {
                let (result, read, had_replacements) =
                    decoder.decode_to_string(&chunk[offset..n], &mut decoded, last);
                offset += read;
                stats.lossy |= had_replacements;
                if !decoded.is_empty() {
                    writer.write_all(decoded.as_bytes())?;
                    stats.bytes_written += decoded.len() as u64;
                    decoded.clear();
                }
                match result {
                    CoderResult::InputEmpty => break,
                    CoderResult::OutputFull => continue,
                }
            }

            if last {
                break;
            }
        }

        Ok(stats)
    }
}

//! Streaming reader over a fixed-size buffer.
//!
//! Each step reads into the free tail of the buffer, cuts at the last
//! line-break, hands the complete records to the chunk processor and slides
//! the partial record that follows to the front for the next read.

use std::io::{self, Read};

use tracing::{debug, warn};

use crate::{
    core::{
        config::{Config, TrailingRecord},
        constants::LINE_BREAK,
        error::SummaryError,
        stats::StationMap,
    },
    engine::chunk::process_chunk,
};

pub struct StreamingReader<R> {
    src: R,
    buf: Box<[u8]>,
    /// Leftover bytes at the front of `buf`, not yet processed.
    pending: usize,
    /// Bytes already handed to the chunk processor.
    consumed: u64,
    chunks: usize,
    trailing: TrailingRecord,
    done: bool,
}

impl<R: Read> StreamingReader<R> {
    #[must_use]
    pub fn new(src: R, cfg: &Config) -> Self {
        Self {
            src,
            buf: vec![0u8; cfg.buffer_capacity].into_boxed_slice(),
            pending: 0,
            consumed: 0,
            chunks: 0,
            trailing: cfg.trailing,
            done: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes of input processed so far (line-breaks included).
    #[inline]
    #[must_use]
    pub fn bytes_consumed(&self) -> u64 {
        self.consumed
    }

    /// Read and process the next chunk. `Ok(None)` once the input is exhausted.
    pub fn next_chunk(&mut self) -> Result<Option<StationMap>, SummaryError> {
        while !self.done {
            let n = self.fill()?;
            let filled = self.pending + n;
            if filled == 0 {
                self.done = true;
                break;
            }

            if let Some(nl) = self.buf[..filled].iter().rposition(|&b| b == LINE_BREAK) {
                let cut = nl + 1;
                let map = self.process(cut)?;
                self.buf.copy_within(cut..filled, 0);
                self.pending = filled - cut;
                return Ok(Some(map));
            }

            let full = filled == self.capacity();
            if n == 0 || (full && self.at_eof()?) {
                // end of input, unterminated last record
                self.done = true;
                self.pending = 0;
                return match self.trailing {
                    TrailingRecord::Flush => self.process(filled).map(Some),
                    TrailingRecord::Drop => {
                        warn!(bytes = filled, "dropping unterminated final record");
                        Ok(None)
                    }
                };
            }
            if full {
                self.done = true;
                return Err(SummaryError::RecordTooLong {
                    capacity: self.capacity(),
                });
            }
            // short read inside a record: keep it and read more
            self.pending = filled;
        }
        Ok(None)
    }

    /// One `read` into the free tail, retrying only on `Interrupted`.
    fn fill(&mut self) -> io::Result<usize> {
        let pending = self.pending;
        read_retrying(&mut self.src, &mut self.buf[pending..]).inspect_err(|_| self.done = true)
    }

    /// A full buffer without a line-break is only legal as the last record.
    fn at_eof(&mut self) -> io::Result<bool> {
        let mut scratch = [0u8; 1];
        read_retrying(&mut self.src, &mut scratch)
            .map(|n| n == 0)
            .inspect_err(|_| self.done = true)
    }

    fn process(&mut self, len: usize) -> Result<StationMap, SummaryError> {
        let map = process_chunk(&self.buf[..len]).map_err(|e| {
            self.done = true;
            e.rebased(self.consumed)
        })?;
        self.consumed += len as u64;
        self.chunks += 1;
        debug!(
            chunk = self.chunks,
            bytes = len,
            stations = map.len(),
            "chunk processed"
        );
        Ok(map)
    }
}

fn read_retrying<R: Read>(src: &mut R, out: &mut [u8]) -> io::Result<usize> {
    loop {
        match src.read(out) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            r => return r,
        }
    }
}

impl<R: Read> Iterator for StreamingReader<R> {
    type Item = Result<StationMap, SummaryError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_chunk().transpose()
    }
}

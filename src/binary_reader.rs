//! String and skip helpers for SE format streams
//!
//! The SE formats store names either null-terminated or prefixed with a
//! little-endian u16 character count. Both are UTF-8.
//!
//! ```
//! use selib::binary_reader::ReadStringExt;
//! use std::io::Cursor;
//!
//! let mut reader = Cursor::new(b"joint_0\0\x04\x00root".to_vec());
//! assert_eq!(reader.read_null_terminated_string().unwrap(), "joint_0");
//! assert_eq!(reader.read_u16_prefixed_string().unwrap(), "root");
//! ```

use byteorder::{LittleEndian, ReadBytesExt};
use log::warn;
use std::io::{self, BufRead, Seek, SeekFrom};

/// Extends [`BufRead`] with methods for reading characters and strings.
///
/// Buffered so a malformed sequence can stop in front of the byte that broke
/// it instead of swallowing it.
pub trait ReadStringExt: BufRead {
    /// Reads a single UTF-8 encoded character.
    ///
    /// Malformed sequences decode to `U+FFFD`. A byte that is not a
    /// continuation byte ends the sequence and is left in the stream.
    /// Running out of data is an [`io::ErrorKind::UnexpectedEof`] error.
    fn read_char(&mut self) -> io::Result<char> {
        let lead = self.read_u8()?;
        let width = match lead {
            0x00..=0x7f => return Ok(lead as char),
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            _ => {
                warn!("Invalid UTF-8 lead byte 0x{lead:02x}, using replacement character");
                return Ok(char::REPLACEMENT_CHARACTER);
            }
        };
        let mut buf = [0u8; 4];
        buf[0] = lead;
        for slot in buf.iter_mut().take(width).skip(1) {
            let next = match self.fill_buf()?.first() {
                Some(&next) => next,
                None => return Err(io::ErrorKind::UnexpectedEof.into()),
            };
            if !(0x80..=0xbf).contains(&next) {
                warn!(
                    "Truncated UTF-8 sequence before byte 0x{next:02x}, using replacement character"
                );
                return Ok(char::REPLACEMENT_CHARACTER);
            }
            self.consume(1);
            *slot = next;
        }
        match std::str::from_utf8(&buf[..width]) {
            Ok(s) => Ok(s.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)),
            Err(e) => {
                warn!(
                    "Invalid UTF-8 sequence {:02x?}: {e}, using replacement character",
                    &buf[..width]
                );
                Ok(char::REPLACEMENT_CHARACTER)
            }
        }
    }

    /// Reads characters up to a `'\0'`, which is consumed but not returned.
    fn read_null_terminated_string(&mut self) -> io::Result<String> {
        let mut result = String::new();
        loop {
            match self.read_char()? {
                '\0' => return Ok(result),
                c => result.push(c),
            }
        }
    }

    /// Reads a little-endian u16 character count followed by that many characters.
    fn read_u16_prefixed_string(&mut self) -> io::Result<String> {
        let length = self.read_u16::<LittleEndian>()?;
        (0..length).map(|_| self.read_char()).collect()
    }
}

impl<R: BufRead + ?Sized> ReadStringExt for R {}

/// Extends [`Seek`] with relative and absolute skips.
pub trait SkipExt: Seek {
    /// Moves `len` bytes from the current position, returns the new position.
    fn skip(&mut self, len: i64) -> io::Result<u64> {
        self.seek(SeekFrom::Current(len))
    }

    /// Moves to `position` bytes from the start, returns the new position.
    fn skip_from_start(&mut self, position: u64) -> io::Result<u64> {
        self.seek(SeekFrom::Start(position))
    }
}

impl<S: Seek + ?Sized> SkipExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use testresult::TestResult;

    #[test]
    fn test_read_char() -> TestResult {
        let mut reader = Cursor::new("aé€😀".as_bytes());
        assert_eq!(reader.read_char()?, 'a');
        assert_eq!(reader.read_char()?, 'é');
        assert_eq!(reader.read_char()?, '€');
        assert_eq!(reader.read_char()?, '😀');
        Ok(())
    }

    #[test]
    fn test_read_char_invalid() -> TestResult {
        // stray continuation byte, then a two byte lead followed by ascii
        let mut reader = Cursor::new(vec![0x80, 0xc3, 0x41]);
        assert_eq!(reader.read_char()?, char::REPLACEMENT_CHARACTER);
        assert_eq!(reader.read_char()?, char::REPLACEMENT_CHARACTER);
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.read_char()?, 'A');
        Ok(())
    }

    #[test]
    fn test_read_char_overlong_is_replaced() -> TestResult {
        // overlong encoding of '/', continuation bytes are valid so both are consumed
        let mut reader = Cursor::new(vec![0xc0, 0xaf, b'x']);
        assert_eq!(reader.read_char()?, char::REPLACEMENT_CHARACTER);
        assert_eq!(reader.read_char()?, 'x');
        Ok(())
    }

    #[test]
    fn test_null_terminated_truncated_before_terminator() -> TestResult {
        let mut reader = Cursor::new(vec![b'a', b'b', 0xc3, 0x00, b'c', b'd', 0x00]);
        assert_eq!(reader.read_null_terminated_string()?, "ab\u{fffd}");
        assert_eq!(reader.position(), 4);
        assert_eq!(reader.read_null_terminated_string()?, "cd");
        Ok(())
    }

    #[test]
    fn test_null_terminated_truncated_keeps_following_chars() -> TestResult {
        let mut reader = Cursor::new(vec![0xe2, b'A', b'B', 0x00]);
        assert_eq!(reader.read_null_terminated_string()?, "\u{fffd}AB");
        assert_eq!(reader.position(), 4);
        Ok(())
    }

    #[test]
    fn test_read_char_eof() {
        let mut reader = Cursor::new(vec![0xe2, 0x82]);
        let err = reader.read_char().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_null_terminated() -> TestResult {
        let mut reader = Cursor::new(b"tag_origin\0\0rest".to_vec());
        assert_eq!(reader.read_null_terminated_string()?, "tag_origin");
        assert_eq!(reader.read_null_terminated_string()?, "");
        assert_eq!(reader.position(), 12);
        Ok(())
    }

    #[test]
    fn test_null_terminated_missing_terminator() {
        let mut reader = Cursor::new(b"tag".to_vec());
        let err = reader.read_null_terminated_string().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_u16_prefixed_counts_characters() -> TestResult {
        let mut data = vec![3, 0];
        data.extend_from_slice("aé€".as_bytes());
        data.push(b'!');
        let mut reader = Cursor::new(data);
        assert_eq!(reader.read_u16_prefixed_string()?, "aé€");
        assert_eq!(reader.read_char()?, '!');
        Ok(())
    }

    #[test]
    fn test_u16_prefixed_short() {
        let mut reader = Cursor::new(vec![5, 0, b'a', b'b']);
        let err = reader.read_u16_prefixed_string().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_skip() -> TestResult {
        let mut reader = Cursor::new(b"0123456789".to_vec());
        assert_eq!(reader.skip(4)?, 4);
        assert_eq!(reader.read_u8()?, b'4');
        assert_eq!(reader.skip(-2)?, 3);
        assert_eq!(reader.skip_from_start(8)?, 8);
        assert_eq!(reader.read_u8()?, b'8');
        Ok(())
    }
}

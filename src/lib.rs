use std::fmt;
use std::io::{self, Write};

/// Number of bytes emitted per line of the definition body.
///
/// Affects output layout only, never the embedded byte sequence.
pub const BYTES_PER_LINE: usize = 8;

/// Identifier error kind.
#[derive(Debug, PartialEq, Eq)]
pub enum IdentifierError {
    /// Sanitizing the file name left no characters.
    Empty,
    /// The identifier would start with a digit.
    LeadingDigit,
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => {
                write!(f, "no identifier characters left after sanitizing")
            }
            Self::LeadingDigit => write!(f, "identifier starts with a digit"),
        }
    }
}

impl std::error::Error for IdentifierError {}

/// Symbol name shared by both output artifacts.
///
/// Derived from the input file name: the portion before the first `.`,
/// with `-` replaced by `_` and everything outside `[0-9A-Za-z_]`
/// removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    /// Derive an [`Identifier`] from a file name.
    ///
    /// Returns an error if sanitizing leaves nothing usable as a C
    /// symbol.
    pub fn from_file_name(file_name: &str) -> Result<Self, IdentifierError> {
        let name: String = basename(file_name)
            .chars()
            .map(|c| if c == '-' { '_' } else { c })
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();

        match name.chars().next() {
            None => Err(IdentifierError::Empty),
            Some(c) if c.is_ascii_digit() => Err(IdentifierError::LeadingDigit),
            Some(_) => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the portion of a file name before the first `.`.
///
/// This is the stem used for the output file names. Unlike
/// [`Identifier`] it keeps the original characters.
pub fn basename(file_name: &str) -> &str {
    file_name.split_once('.').map_or(file_name, |(stem, _)| stem)
}

/// Write the definition artifact: a `uint8_t` array holding `data`.
///
/// Bytes are emitted as two-digit uppercase hex, [`BYTES_PER_LINE`] per
/// line, each line tab indented and ending in a trailing comma.
pub fn write_definition<W: Write>(
    w: &mut W,
    name: &Identifier,
    data: &[u8],
) -> io::Result<()> {
    writeln!(w, "#include <stdint.h>")?;
    writeln!(w)?;
    writeln!(w, "const uint8_t {}[{}] = {{", name, data.len())?;

    for chunk in data.chunks(BYTES_PER_LINE) {
        let line: Vec<String> =
            chunk.iter().map(|b| format!("0x{:02X}", b)).collect();
        writeln!(w, "\t{},", line.join(", "))?;
    }

    writeln!(w, "}};")?;

    Ok(())
}

/// Write the declaration artifact: an `extern` reference to the array,
/// guarded with `#pragma once`.
pub fn write_declaration<W: Write>(
    w: &mut W,
    name: &Identifier,
    len: usize,
) -> io::Result<()> {
    writeln!(w, "#pragma once")?;
    writeln!(w)?;
    writeln!(w, "extern const uint8_t {}[{}];", name, len)?;

    Ok(())
}

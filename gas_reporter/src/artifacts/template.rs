//!
//! The creation bytecode template.
//!

use std::str::FromStr;

///
/// The creation bytecode template parsing error.
///
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The template contains a non-hexadecimal character.
    #[error("invalid hexadecimal at offset {offset}")]
    InvalidHex {
        /// The character offset.
        offset: usize,
    },
    /// The template ends in the middle of a byte.
    #[error("odd length of {length} characters")]
    OddLength {
        /// The template length in characters.
        length: usize,
    },
    /// The template ends in the middle of a link placeholder.
    #[error("truncated link placeholder at offset {offset}")]
    TruncatedPlaceholder {
        /// The character offset.
        offset: usize,
    },
}

///
/// The creation bytecode template.
///
/// Link placeholders of not yet linked libraries are wildcards, so the template matches
/// deployments with any library addresses linked in.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BytecodeTemplate {
    /// The template bytes. Wildcard positions hold zeros.
    bytes: Vec<u8>,
    /// The wildcard mask, one flag per byte.
    wildcards: Vec<bool>,
}

impl BytecodeTemplate {
    /// The link placeholder length in characters, e.g. `__$3f6e...$__` or `__Library_____`.
    pub const PLACEHOLDER_LENGTH: usize = 40;

    /// The library address guard length in characters: `PUSH20` and twenty `0xff` bytes.
    pub const ADDRESS_GUARD_LENGTH: usize = 42;

    ///
    /// Whether the template has no bytecode, as for interfaces and abstract contracts.
    ///
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    ///
    /// Whether the template has no fixed byte, being empty or made of link placeholders only.
    ///
    /// Such templates match almost any creation input.
    ///
    pub fn is_abstract(&self) -> bool {
        self.wildcards.iter().all(|wildcard| *wildcard)
    }

    ///
    /// The template length in bytes.
    ///
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    ///
    /// The number of wildcard bytes.
    ///
    pub fn wildcard_count(&self) -> usize {
        self.wildcards.iter().filter(|wildcard| **wildcard).count()
    }

    ///
    /// Whether the creation input was produced from this template.
    ///
    /// Bytes beyond the template length are constructor arguments and are ignored.
    /// An empty template matches any input.
    ///
    pub fn matches(&self, input: &[u8]) -> bool {
        if input.len() < self.bytes.len() {
            return false;
        }

        self.bytes
            .iter()
            .zip(self.wildcards.iter())
            .zip(input.iter())
            .all(|((expected, wildcard), found)| *wildcard || expected == found)
    }

    ///
    /// Appends `count` wildcard bytes.
    ///
    fn push_wildcards(&mut self, count: usize) {
        self.bytes.extend(std::iter::repeat(0).take(count));
        self.wildcards.extend(std::iter::repeat(true).take(count));
    }
}

impl FromStr for BytecodeTemplate {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let string = string.strip_prefix("0x").unwrap_or(string).as_bytes();

        let mut template = Self::default();
        let mut offset = 0;
        while offset < string.len() {
            let rest = &string[offset..];

            if rest.starts_with(b"__") {
                if rest.len() < Self::PLACEHOLDER_LENGTH {
                    return Err(Error::TruncatedPlaceholder { offset });
                }
                template.push_wildcards(Self::PLACEHOLDER_LENGTH / 2);
                offset += Self::PLACEHOLDER_LENGTH;
                continue;
            }

            if rest.len() >= Self::ADDRESS_GUARD_LENGTH
                && rest.starts_with(b"73")
                && rest[2..Self::ADDRESS_GUARD_LENGTH]
                    .iter()
                    .all(|character| character.eq_ignore_ascii_case(&b'f'))
            {
                template.push_wildcards(Self::ADDRESS_GUARD_LENGTH / 2);
                offset += Self::ADDRESS_GUARD_LENGTH;
                continue;
            }

            if rest.len() < 2 {
                return Err(Error::OddLength {
                    length: string.len(),
                });
            }
            let mut byte = [0u8; 1];
            hex::decode_to_slice(&rest[..2], &mut byte)
                .map_err(|_| Error::InvalidHex { offset })?;
            template.bytes.push(byte[0]);
            template.wildcards.push(false);
            offset += 2;
        }

        Ok(template)
    }
}

//!
//! The test runner lifecycle event.
//!

use std::io::BufRead;
use std::str::FromStr;

///
/// The test runner lifecycle event, one JSON object per line.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// The run starts.
    Start,
    /// A suite starts.
    Suite {
        /// The suite title.
        title: String,
    },
    /// The current suite ends.
    SuiteEnd,
    /// A test starts, before its setup hooks.
    Test,
    /// A hook ends. The last one before a test body marks the method range start.
    HookEnd,
    /// A test passes.
    Pass {
        /// The test title.
        title: String,
        /// The test duration in milliseconds.
        #[serde(default)]
        duration_ms: Option<u64>,
    },
    /// A test fails.
    Fail {
        /// The test title.
        title: String,
    },
    /// A test is skipped.
    Pending {
        /// The test title.
        title: String,
    },
    /// The run ends.
    End,
}

impl FromStr for Event {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(string)
            .map_err(|error| anyhow::anyhow!("Event `{string}` parsing: {error}"))
    }
}

///
/// The newline-delimited event stream reader.
///
/// Blank lines are skipped. Malformed lines are reported with their line number.
///
#[derive(Debug)]
pub struct EventReader<R>
where
    R: BufRead,
{
    /// The underlying reader.
    reader: R,
    /// The last read line number, starting from 1.
    line_number: usize,
}

impl<R> EventReader<R>
where
    R: BufRead,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }
}

impl<R> Iterator for EventReader<R>
where
    R: BufRead,
{
    type Item = anyhow::Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            self.line_number += 1;
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) if line.trim().is_empty() => continue,
                Ok(_) => {
                    return Some(
                        Event::from_str(line.trim())
                            .map_err(|error| anyhow::anyhow!("Line {}: {error}", self.line_number)),
                    )
                }
                Err(error) => {
                    return Some(Err(anyhow::anyhow!(
                        "Line {} reading: {error}",
                        self.line_number
                    )))
                }
            }
        }
    }
}

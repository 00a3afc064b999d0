//! Hosts file lines: toggle managed entries and report their state.
//!
//! The raw byte lines are the only state. Managed entries are decoded on demand
//! and written back into their slot when changed.

use std::io::{self, Write};

use crate::config::HostsConfig;
use crate::error::HostsError;
use crate::managed::{Codec, ManagedHost};
use crate::store;

/// All lines of a hosts file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostLines {
    lines: Vec<Vec<u8>>,
}

impl From<Vec<Vec<u8>>> for HostLines {
    fn from(lines: Vec<Vec<u8>>) -> Self {
        Self { lines }
    }
}

impl From<Vec<String>> for HostLines {
    fn from(lines: Vec<String>) -> Self {
        Self {
            lines: lines.into_iter().map(String::into_bytes).collect(),
        }
    }
}

impl HostLines {
    /// Load the hosts file named by `config`.
    pub fn load(config: &HostsConfig) -> Result<Self, HostsError> {
        store::read_lines(&config.path, config.read_buffer_size).map(Self::from)
    }

    /// Write all lines back to the hosts file named by `config`.
    pub fn save(&self, config: &HostsConfig) -> Result<(), HostsError> {
        store::write_lines(&config.path, &self.lines)
    }

    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    /// Managed entries with their line index, in file order.
    pub fn managed<'a>(
        &'a self,
        codec: &'a Codec,
    ) -> impl Iterator<Item = (usize, ManagedHost)> + 'a {
        self.lines
            .iter()
            .enumerate()
            .filter_map(move |(i, l)| codec.decode(l).map(|mh| (i, mh)))
    }

    /// Set `blocked` on every managed entry matching `filters` and re-encode
    /// it in place. Returns the number of lines rewritten, including ones
    /// that already had the requested state.
    pub fn set_blocked(&mut self, codec: &Codec, blocked: bool, filters: &[String]) -> usize {
        let mut rewritten = 0;
        for line in self.lines.iter_mut() {
            let Some(mut mh) = codec.decode(line.as_slice()) else {
                continue;
            };
            if !matches_filter(&mh, filters) {
                continue;
            }
            mh.blocked = blocked;
            *line = codec.encode(&mh);
            rewritten += 1;
        }
        tracing::debug!(blocked, ?filters, rewritten, "updated managed hosts");
        rewritten
    }

    /// Write the Unblocked/Blocked report.
    pub fn write_report<W: Write>(&self, codec: &Codec, mut w: W) -> io::Result<()> {
        let (blocked, unblocked): (Vec<_>, Vec<_>) =
            self.managed(codec).map(|(_, mh)| mh).partition(|mh| mh.blocked);

        for (i, (name, hosts)) in [("Unblocked", unblocked), ("Blocked", blocked)]
            .into_iter()
            .enumerate()
        {
            if i != 0 {
                writeln!(w)?;
            }
            writeln!(w, "{name}:")?;
            for mh in hosts {
                writeln!(w, "  {}", mh.hosts.join(", "))?;
            }
        }
        Ok(())
    }

    /// Report as a string.
    pub fn report(&self, codec: &Codec) -> String {
        let mut buf = Vec::new();
        // writing to a Vec cannot fail
        let _ = self.write_report(codec, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// True if `filters` is empty or any host contains any filter as a substring.
pub fn matches_filter(mh: &ManagedHost, filters: &[String]) -> bool {
    filters.is_empty()
        || filters
            .iter()
            .any(|f| mh.hosts.iter().any(|h| h.contains(f.as_str())))
}

//! Managed host lines: recognise, decode and re-encode the entries we own.
//!
//! A managed line looks like
//!
//! ```text
//! [# ]<block ip> <host> <host>... <marker>
//! ```
//!
//! The leading `# ` means the entry is commented out, i.e. unblocked.
//! Matching is done on raw bytes; a line whose host list is not UTF-8 is
//! left alone like any other unmanaged line.

use regex::bytes::Regex;

use crate::config::HostsConfig;
use crate::error::HostsError;

/// Decoded view of one managed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedHost {
    pub hosts: Vec<String>,
    pub blocked: bool,
}

/// Encoder/decoder for managed lines under a given block IP and marker.
#[derive(Debug, Clone)]
pub struct Codec {
    pattern: Regex,
    block_ip: String,
    marker: String,
}

impl Codec {
    pub fn new(config: &HostsConfig) -> Result<Self, HostsError> {
        let pattern = format!(
            "^(# )?{} ([^#]+) {}",
            regex::escape(&config.block_ip),
            regex::escape(&config.marker)
        );
        Ok(Self {
            pattern: Regex::new(&pattern)?,
            block_ip: config.block_ip.clone(),
            marker: config.marker.clone(),
        })
    }

    /// Decode `line`, or `None` if it is not one of ours.
    ///
    /// Hosts are split on single spaces with no trimming, so a double space
    /// yields an empty host.
    pub fn decode(&self, line: impl AsRef<[u8]>) -> Option<ManagedHost> {
        let caps = self.pattern.captures(line.as_ref())?;
        let segment = std::str::from_utf8(caps.get(2)?.as_bytes()).ok()?;
        let hosts = segment.split(' ').map(String::from).collect();
        Some(ManagedHost {
            hosts,
            blocked: caps.get(1).is_none(),
        })
    }

    /// Render `host` back into its line form. No escaping is done.
    pub fn encode(&self, host: &ManagedHost) -> Vec<u8> {
        let prefix = if host.blocked { "" } else { "# " };
        format!(
            "{prefix}{} {} {}",
            self.block_ip,
            host.hosts.join(" "),
            self.marker
        )
        .into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "# do not edit; managed by github.com/felixge/hosts";

    fn codec() -> Codec {
        Codec::new(&HostsConfig::default()).unwrap()
    }

    #[test]
    fn decode_blocked_line() {
        let mh = codec()
            .decode(&format!("127.0.0.1 a.com b.com {MARKER}"))
            .unwrap();
        assert_eq!(mh.hosts, vec!["a.com", "b.com"]);
        assert!(mh.blocked);
    }

    #[test]
    fn decode_unblocked_line() {
        let mh = codec()
            .decode(&format!("# 127.0.0.1 example.com {MARKER}"))
            .unwrap();
        assert_eq!(mh.hosts, vec!["example.com"]);
        assert!(!mh.blocked);
    }

    #[test]
    fn unmanaged_lines_are_ignored() {
        let c = codec();
        assert_eq!(c.decode("127.0.0.1 localhost"), None);
        assert_eq!(c.decode("# a plain comment"), None);
        assert_eq!(c.decode(""), None);
        assert_eq!(c.decode(&format!("10.0.0.1 a.com {MARKER}")), None);
        assert_eq!(c.decode(&format!(" 127.0.0.1 a.com {MARKER}")), None);
        assert_eq!(c.decode(&format!("#127.0.0.1 a.com {MARKER}")), None);
        assert_eq!(c.decode("127.0.0.1 a.com # something else"), None);
    }

    #[test]
    fn block_ip_dots_are_literal() {
        assert_eq!(codec().decode(&format!("127x0x0x1 a.com {MARKER}")), None);
    }

    #[test]
    fn double_space_yields_empty_host() {
        let mh = codec()
            .decode(&format!("127.0.0.1 a.com  b.com {MARKER}"))
            .unwrap();
        assert_eq!(mh.hosts, vec!["a.com", "", "b.com"]);
    }

    #[test]
    fn encode_reproduces_decoded_line() {
        let c = codec();
        for line in [
            format!("127.0.0.1 a.com {MARKER}"),
            format!("# 127.0.0.1 a.com www.a.com {MARKER}"),
            format!("127.0.0.1 a.com  b.com {MARKER}"),
        ] {
            let mh = c.decode(&line).unwrap();
            assert_eq!(c.encode(&mh), line.as_bytes());
        }
    }

    #[test]
    fn non_utf8_host_list_is_not_managed() {
        let mut line = b"127.0.0.1 caf\xe9.com ".to_vec();
        line.extend_from_slice(MARKER.as_bytes());
        assert_eq!(codec().decode(&line), None);
    }

    #[test]
    fn decode_inverts_encode() {
        let c = codec();
        let mh = ManagedHost {
            hosts: vec!["x.org".into(), "y.org".into()],
            blocked: false,
        };
        assert_eq!(c.decode(&c.encode(&mh)), Some(mh));
    }

    #[test]
    fn custom_marker_and_ip() {
        let config = HostsConfig::default()
            .with_marker("# owned-by-test")
            .with_block_ip("0.0.0.0");
        let c = Codec::new(&config).unwrap();
        let mh = c.decode("0.0.0.0 ads.net # owned-by-test").unwrap();
        assert_eq!(mh.hosts, vec!["ads.net"]);
        assert!(mh.blocked);
        assert_eq!(c.decode(&format!("127.0.0.1 ads.net {MARKER}")), None);
    }
}

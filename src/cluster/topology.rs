//! Cluster topology data structures and the CLUSTER SLOTS parser.
//!
//! A [`ClusterTopology`] is an ordered list of slot ranges, each with the
//! addresses of the nodes serving it (master first, then replicas), exactly
//! as the server reported them. Ranges are neither sorted, merged, nor
//! checked for gaps or overlaps here; that is up to whoever routes with it.

use tracing::debug;

use crate::cluster::slot::SLOT_COUNT;
use crate::proto::frame::Frame;
use crate::{Error, Result};

const ENTRY_SHAPE: &str = "[start, end, [host, port]...] with start and end in 0..=16384";
const NODE_SHAPE: &str = "[host, port] with a non-empty host and a positive port";

/// An inclusive range of hash slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotRange {
    /// Start of the slot range (inclusive)
    pub start: u16,
    /// End of the slot range (inclusive)
    pub end: u16,
}

impl SlotRange {
    /// Creates a slot range covering `start..=end`.
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Returns true if the given slot is within this range.
    pub fn contains(&self, slot: u16) -> bool {
        slot >= self.start && slot <= self.end
    }

    /// Returns the number of slots in this range.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            usize::from(self.end - self.start) + 1
        }
    }

    /// Returns true if the range is inverted and covers nothing.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// One slot range and the nodes serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterSlot {
    range: SlotRange,
    addresses: Vec<String>,
}

impl ClusterSlot {
    /// The slots this entry covers.
    pub fn range(&self) -> SlotRange {
        self.range
    }

    /// All node addresses (`host:port`), master first.
    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    /// The master's address.
    pub fn master(&self) -> Option<&str> {
        self.addresses.first().map(String::as_str)
    }

    /// Replica addresses in server-reported order.
    pub fn replicas(&self) -> &[String] {
        self.addresses.get(1..).unwrap_or_default()
    }
}

/// Complete cluster topology information.
///
/// Built wholesale from one CLUSTER SLOTS reply and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterTopology {
    slots: Vec<ClusterSlot>,
}

impl ClusterTopology {
    /// Creates a new empty cluster topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses cluster topology from a CLUSTER SLOTS reply.
    ///
    /// Expected shape:
    ///
    /// ```text
    /// [[start, end, [host, port], [host, port], ...], ...]
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedReply`] carrying the offending value if:
    /// - The reply is not an array
    /// - An entry is not an array of at least 3 elements
    /// - A slot bound is not an integer in `0..=16384`
    /// - A node is not a `[host, port]` pair with a non-empty host and a positive port
    ///
    /// One bad entry fails the whole reply; no partial topology is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use muxis_topology::{ClusterTopology, Frame};
    ///
    /// let reply = Frame::Array(vec![Frame::Array(vec![
    ///     Frame::Integer(0),
    ///     Frame::Integer(16383),
    ///     Frame::Array(vec![Frame::bulk("127.0.0.1"), Frame::Integer(7000)]),
    /// ])]);
    ///
    /// let topology = ClusterTopology::from_cluster_slots(&reply).unwrap();
    /// assert_eq!(topology.master_for_slot(42), Some("127.0.0.1:7000"));
    /// ```
    pub fn from_cluster_slots(reply: &Frame) -> Result<Self> {
        let entries = reply
            .as_array()
            .ok_or_else(|| Error::malformed("array of slot ranges", reply))?;

        let slots = entries
            .iter()
            .map(parse_slot_entry)
            .collect::<Result<Vec<_>>>()?;

        debug!(ranges = slots.len(), "parsed CLUSTER SLOTS reply");

        Ok(Self { slots })
    }

    /// Slot entries in server-reported order.
    pub fn slots(&self) -> &[ClusterSlot] {
        &self.slots
    }

    /// Iterates over slot entries in server-reported order.
    pub fn iter(&self) -> std::slice::Iter<'_, ClusterSlot> {
        self.slots.iter()
    }

    /// Number of slot entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the topology has no slot entries.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Finds the first entry (in server order) whose range contains `slot`.
    pub fn slot_for(&self, slot: u16) -> Option<&ClusterSlot> {
        self.slots.iter().find(|entry| entry.range.contains(slot))
    }

    /// Finds the master address responsible for a given slot.
    ///
    /// Returns None if the slot is not covered.
    pub fn master_for_slot(&self, slot: u16) -> Option<&str> {
        self.slot_for(slot).and_then(ClusterSlot::master)
    }

    /// Finds the replica addresses for a given slot.
    pub fn replicas_for_slot(&self, slot: u16) -> Option<&[String]> {
        self.slot_for(slot).map(ClusterSlot::replicas)
    }

    /// Distinct node addresses in first-seen order.
    pub fn addresses(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for address in self.slots.iter().flat_map(|entry| entry.addresses.iter()) {
            if !seen.contains(&address.as_str()) {
                seen.push(address.as_str());
            }
        }
        seen
    }

    /// Checks whether every slot in `0..16384` is covered by some entry.
    pub fn covers_all_slots(&self) -> bool {
        let mut covered = vec![false; usize::from(SLOT_COUNT)];

        for entry in &self.slots {
            let end = entry.range.end.min(SLOT_COUNT - 1);
            for slot in entry.range.start..=end {
                covered[usize::from(slot)] = true;
            }
        }

        covered.iter().all(|&c| c)
    }
}

impl<'a> IntoIterator for &'a ClusterTopology {
    type Item = &'a ClusterSlot;
    type IntoIter = std::slice::Iter<'a, ClusterSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

fn parse_slot_entry(entry: &Frame) -> Result<ClusterSlot> {
    let items = match entry.as_array() {
        Some(items) if items.len() >= 3 => items,
        _ => return Err(Error::malformed(ENTRY_SHAPE, entry)),
    };

    let start = parse_slot_bound(&items[0], entry)?;
    let end = parse_slot_bound(&items[1], entry)?;

    let addresses = items[2..]
        .iter()
        .map(parse_node_address)
        .collect::<Result<Vec<_>>>()?;

    Ok(ClusterSlot {
        range: SlotRange { start, end },
        addresses,
    })
}

/// Accepts `0..=16384`; the upper bound is one past the last slot on purpose.
fn parse_slot_bound(value: &Frame, entry: &Frame) -> Result<u16> {
    value
        .as_int()
        .filter(|n| (0..=i64::from(SLOT_COUNT)).contains(n))
        .and_then(|n| u16::try_from(n).ok())
        .ok_or_else(|| Error::malformed(ENTRY_SHAPE, entry))
}

fn parse_node_address(node: &Frame) -> Result<String> {
    let pair = match node.as_array() {
        Some(pair) if pair.len() == 2 => pair,
        _ => return Err(Error::malformed(NODE_SHAPE, node)),
    };

    let host = match pair[0].as_str() {
        Some(host) if !host.is_empty() => host,
        _ => return Err(Error::malformed(NODE_SHAPE, node)),
    };

    let port = match pair[1].as_int() {
        Some(port) if port > 0 => port,
        _ => return Err(Error::malformed(NODE_SHAPE, node)),
    };

    Ok(join_host_port(host, port))
}

/// Joins host and port, bracketing IPv6 literals.
fn join_host_port(host: &str, port: i64) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

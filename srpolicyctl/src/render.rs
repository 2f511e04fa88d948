use std::fmt;

use crate::{Policy, SegmentList};

impl fmt::Display for SegmentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SegmentList:")?;
        writeln!(f, "  Weight: {}", self.weight)?;
        write!(f, "  Segments: <")?;
        for seg in self.segments.iter() {
            write!(
                f,
                "{{ Sid: {}, Behavior: {} }}",
                seg.sid,
                u16::from(seg.behavior)
            )?;
        }
        write!(f, ">")
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NLRI: {}", self.nlri)?;
        writeln!(f, "IsWithdraw: {}", self.is_withdraw)?;
        match &self.age {
            Some(age) => writeln!(f, "Age: {}", age.to_rfc3339())?,
            None => writeln!(f, "Age: -")?,
        }
        writeln!(f, "SourceAsn: {}", self.source_asn)?;
        writeln!(f, "Family: {}", self.family)?;
        writeln!(f, "NeighborIp: {}", self.neighbor_ip)?;
        writeln!(f, "{}", self.segment_list)?;
        match &self.bsid {
            Some(bsid) => writeln!(f, "Bsid: {}", bsid)?,
            None => writeln!(f, "Bsid: -")?,
        }
        writeln!(f, "Priority: {}", self.priority)?;
        match &self.preference {
            Some(pref) => write!(f, "Preference: {}", pref),
            None => write!(f, "Preference: -"),
        }
    }
}

pub fn render(policy: &Policy) -> String {
    policy.to_string()
}

use std::net::Ipv4Addr;

/// Extracts an IPv4 address embedded in a subdomain label sequence.
///
/// The last four groups of 1-3 digits, each pair joined by a single `.` or
/// `-`, form the candidate address; separators may be mixed. Anything before
/// them is ignored, provided it is joined to the quad by a dot (a dash-joined
/// prefix invalidates the whole parse, as does a fourth adjacent digit or an
/// octet above 255). Scans right to left so no backtracking is involved.
///
/// Returns the canonical address: `10-0-0-1` and `name.10.0.0.1` both yield
/// `10.0.0.1`.
pub fn parse_embedded_ipv4(subdomain: &str) -> Option<Ipv4Addr> {
    let bytes = subdomain.as_bytes();
    let mut octets = [0u8; 4];
    let mut end = bytes.len();

    for slot in (0..4).rev() {
        let mut start = end;
        while start > 0 && bytes[start - 1].is_ascii_digit() && end - start < 3 {
            start -= 1;
        }
        if start == end {
            return None;
        }
        if start > 0 && bytes[start - 1].is_ascii_digit() {
            // group longer than three digits
            return None;
        }

        let value: u16 = subdomain[start..end].parse().ok()?;
        if value > 255 {
            return None;
        }
        octets[slot] = value as u8;

        if slot == 0 {
            // boundary before the first octet: start of the subdomain, or a
            // dot preceded by at least one prefix character
            if start == 0 {
                break;
            }
            if bytes[start - 1] != b'.' || start == 1 {
                return None;
            }
            break;
        }

        if start == 0 {
            return None;
        }
        let sep = bytes[start - 1];
        if sep != b'.' && sep != b'-' {
            return None;
        }
        end = start - 1;
    }

    Some(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]))
}

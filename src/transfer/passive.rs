//! Passive mode negotiation
//!
//! Parses the `(h1,h2,h3,h4,p1,p2)` address carried by a `227` reply.

use crate::transfer::PassiveEndpoint;

/// Extract the data endpoint from a `PASV` reply message.
///
/// Returns `None` unless the message holds a parenthesised group of exactly
/// six decimal octets.
pub fn parse_pasv_reply(message: &str) -> Option<PassiveEndpoint> {
    let start = message.find('(')?;
    let end = start + message[start..].find(')')?;

    let mut octets = [0u8; 6];
    let mut fields = message[start + 1..end].split(',');
    for octet in octets.iter_mut() {
        *octet = parse_octet(fields.next()?)?;
    }
    if fields.next().is_some() {
        return None;
    }

    let [h1, h2, h3, h4, p1, p2] = octets;
    Some(PassiveEndpoint {
        host: format!("{h1}.{h2}.{h3}.{h4}"),
        port: u16::from(p1) * 256 + u16::from(p2),
    })
}

fn parse_octet(field: &str) -> Option<u8> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pasv_reply() {
        let endpoint =
            parse_pasv_reply("227 Entering Passive Mode (192,168,1,20,195,80).\r\n").unwrap();
        assert_eq!(endpoint.host, "192.168.1.20");
        assert_eq!(endpoint.port, 195 * 256 + 80);
    }

    #[test]
    fn test_port_bytes() {
        let endpoint = parse_pasv_reply("227 (10,0,0,1,0,21)").unwrap();
        assert_eq!(endpoint.port, 21);
        let endpoint = parse_pasv_reply("227 (10,0,0,1,255,255)").unwrap();
        assert_eq!(endpoint.port, 65535);
        assert_eq!(endpoint.to_string(), "10.0.0.1:65535");
    }

    #[test]
    fn test_malformed_replies() {
        assert!(parse_pasv_reply("227 Entering Passive Mode 127,0,0,1,4,1").is_none());
        assert!(parse_pasv_reply("227 (127,0,0,1,4)").is_none());
        assert!(parse_pasv_reply("227 (127,0,0,1,4,1,9)").is_none());
        assert!(parse_pasv_reply("227 (127,0,0,x,4,1)").is_none());
        assert!(parse_pasv_reply("227 (127,0,0,1,4,256)").is_none());
        assert!(parse_pasv_reply("227 (127,0,0,1,+4,1)").is_none());
        assert!(parse_pasv_reply("227 (127,0,0,1,4,1").is_none());
        assert!(parse_pasv_reply("").is_none());
    }
}

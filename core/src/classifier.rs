use crate::config::LogConfig;
use crate::error::ClassifyError;

/// Resultat av å klassifisere én rå logglinje.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Ikke en notifikasjon for vår karakteristikk.
    Ignored,
    /// Notifikasjon med hex-payload (innholdet mellom `<` og `>`).
    Payload(&'a str),
}

/// Forhåndsberegnede markører, slik at vi ikke formaterer `(1234)` per linje.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    notify_marker: String,
    characteristic_marker: String,
}

impl LineClassifier {
    pub fn new(cfg: &LogConfig) -> Self {
        Self {
            notify_marker: cfg.notify_marker.clone(),
            characteristic_marker: cfg.characteristic_marker(),
        }
    }

    /// Linja kvalifiserer kun hvis den inneholder både notify-markøren og
    /// karakteristikk-markøren. Da må den også bære en `<hex>`-payload.
    pub fn classify<'a>(&self, line: &'a str) -> Result<LineClass<'a>, ClassifyError> {
        if !line.contains(&self.notify_marker) || !line.contains(&self.characteristic_marker) {
            return Ok(LineClass::Ignored);
        }
        find_payload(line)
            .map(LineClass::Payload)
            .ok_or(ClassifyError::MissingPayload)
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(&LogConfig::default())
    }
}

#[inline]
fn is_payload_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'f' | b' ')
}

/// Første `<...>` der innholdet er én eller flere av `[a-f 0-9]`.
pub fn find_payload(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    let mut start = 0;

    while let Some(off) = bytes[start..].iter().position(|&b| b == b'<') {
        let open = start + off;
        let body = open + 1;
        let end = body
            + bytes[body..]
                .iter()
                .take_while(|&&b| is_payload_byte(b))
                .count();

        if end > body && bytes.get(end) == Some(&b'>') {
            return Some(&line[body..end]);
        }
        start = open + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_first_valid_bracket() {
        assert_eq!(find_payload("x <zz> y <33 2e> z <31>"), Some("33 2e"));
        assert_eq!(find_payload("<<3132>"), Some("3132"));
        assert_eq!(find_payload("<> <AB>"), None);
        assert_eq!(find_payload("no brackets"), None);
    }
}

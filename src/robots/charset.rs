use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

/// Looks up an encoding by its WHATWG label, e.g. `windows-1251` or `koi8-r`.
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Picks the encoding of raw robots.txt bytes.
///
/// A byte-order mark decides first, then valid UTF-8 is taken as UTF-8, and
/// anything else goes to the detector.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, false)
}

/// Decodes `bytes` with `encoding`, or with the detected encoding when none is given.
/// Malformed sequences become U+FFFD.
pub fn decode(bytes: &[u8], encoding: Option<&'static Encoding>) -> String {
    let encoding = encoding.unwrap_or_else(|| detect_encoding(bytes));
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    debug!(encoding = encoding.name(), had_errors, "decoded robots.txt");
    text.into_owned()
}

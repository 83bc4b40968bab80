//! C-compatible enums accepted by FFI functions.

/// Output format for `objshim_log_init`.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjshimLogFormat {
    /// Multi-line human-readable output.
    Pretty = 0,
    /// One line per event.
    Compact = 1,
    /// Newline-delimited JSON objects.
    Json = 2,
}

impl ObjshimLogFormat {
    /// Parse a raw FFI tag, `None` if it names no format.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            x if x == Self::Pretty as i32 => Some(Self::Pretty),
            x if x == Self::Compact as i32 => Some(Self::Compact),
            x if x == Self::Json as i32 => Some(Self::Json),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_accepts_known_tags_only() {
        assert_eq!(ObjshimLogFormat::from_raw(0), Some(ObjshimLogFormat::Pretty));
        assert_eq!(ObjshimLogFormat::from_raw(1), Some(ObjshimLogFormat::Compact));
        assert_eq!(ObjshimLogFormat::from_raw(2), Some(ObjshimLogFormat::Json));
        assert_eq!(ObjshimLogFormat::from_raw(3), None);
        assert_eq!(ObjshimLogFormat::from_raw(-1), None);
    }
}

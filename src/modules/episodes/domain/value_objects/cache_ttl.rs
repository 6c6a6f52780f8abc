/// Expiry applied to both cache namespaces of a title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtl(u64);

impl CacheTtl {
    /// 3 hours
    pub const RELEASING_SECS: u64 = 60 * 60 * 3;
    /// 45 days
    pub const FINISHED_SECS: u64 = 60 * 60 * 24 * 45;

    /// Releasing is a caller hint, never derived from the data
    pub fn for_releasing(releasing: bool) -> Self {
        if releasing {
            Self(Self::RELEASING_SECS)
        } else {
            Self(Self::FINISHED_SECS)
        }
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }
}

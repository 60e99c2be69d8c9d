use crate::types::{MeetingRecord, MeetingStatus};

/// Decides a meeting's status from its assembled fields.
pub trait StatusDeriver: Send + Sync {
    fn derive_status(&self, record: &MeetingRecord) -> MeetingStatus;
}

/// Produces a stable identifier for a meeting from its assembled fields.
pub trait IdDeriver: Send + Sync {
    fn derive_id(&self, record: &MeetingRecord) -> String;
}

use chrono::{DateTime, Utc};

pub type Id = i64;
pub type Time = DateTime<Utc>;

use serde::Deserialize;

use crate::github::events::lenient;

#[derive(Debug, Default, Deserialize)]
pub struct WatchPayload {
    // GitHub only ever sends `started` here
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<String>,
}

use serde::Deserialize;

use crate::github::events::lenient;

#[derive(Debug, Default, Deserialize)]
pub struct PushPayload {
    /// Number of commits in the push. Only JSON integers are accepted.
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<i64>,
}

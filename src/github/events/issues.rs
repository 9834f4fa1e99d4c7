use serde::Deserialize;

use crate::github::events::lenient;

#[derive(Debug, Default, Deserialize)]
pub struct IssuesPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<String>,
}

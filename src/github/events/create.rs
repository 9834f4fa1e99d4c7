use serde::Deserialize;

use crate::github::events::{lenient, RefType};

#[derive(Debug, Default, Deserialize)]
pub struct CreatePayload {
    #[serde(default, deserialize_with = "lenient")]
    pub r#ref: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ref_type: Option<RefType>,
}

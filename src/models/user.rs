use serde::{Deserialize, Serialize};

/// Reporting view of a catalog user.
///
/// Backed by the keyless `movies_users` table: bulk-scan reads only, no
/// row-level writes. `subscriptions` lists the literal labels of every
/// streaming-service flag set on the row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub subscriptions: Vec<String>,
}

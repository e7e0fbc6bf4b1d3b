//! Provider dataset as published at the ip-ranges endpoint.

use serde::{Deserialize, Serialize};

/// One entry of the IPv4 `prefixes` list.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RawPrefix {
    pub ip_prefix: Option<String>,
    pub service: Option<String>,
    pub region: Option<String>,
}

/// One entry of the `ipv6_prefixes` list. Counted, never matched.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RawIpv6Prefix {
    pub ipv6_prefix: Option<String>,
    pub service: Option<String>,
    pub region: Option<String>,
}

/// Top-level document returned by the provider endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct IpRangesData {
    #[serde(rename = "syncToken")]
    pub sync_token: Option<String>,
    #[serde(rename = "createDate")]
    pub create_date: Option<String>,
    #[serde(default)]
    pub prefixes: Vec<RawPrefix>,
    #[serde(default)]
    pub ipv6_prefixes: Vec<RawIpv6Prefix>,
}

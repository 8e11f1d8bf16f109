use serde::{Deserialize, Deserializer, Serialize};

/// Lambda invocation payload. Accepted as-is; only `id` is echoed back.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Request {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Response {
    pub message: String,
    pub ok: bool,
}

/// Body of a Slack incoming webhook call.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SlackMessage {
    pub text: String,
}

/// Root document returned by the `departure-times` endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LocationDepartures {
    #[serde(deserialize_with = "null_as_default")]
    pub location: Location,
    #[serde(deserialize_with = "null_as_default")]
    pub tabs: Vec<Tab>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stop_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub place: Place,
    #[serde(deserialize_with = "null_as_default")]
    pub lat_long: LatLong,
    #[serde(deserialize_with = "null_as_default")]
    pub urls: Urls,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Place {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub show_region: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub show_country: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LatLong {
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub long: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Urls {
    #[serde(rename = "nl-NL", deserialize_with = "null_as_default")]
    pub nl_nl: String,
    #[serde(rename = "en-GB", deserialize_with = "null_as_default")]
    pub en_gb: String,
}

/// A named group of stops and their departures. Only the first tab of a
/// response is ever rendered.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Tab {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub locations: Vec<Location>,
    #[serde(deserialize_with = "null_as_default")]
    pub departures: Vec<Departure>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Departure {
    /// Display time as sent by the API, e.g. `"12:05"`. Never parsed.
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub destination_name: String,
    #[serde(skip_serializing_if = "Flexible::is_absent")]
    pub via_names: Flexible,
    #[serde(deserialize_with = "null_as_default")]
    pub mode: Mode,
    #[serde(deserialize_with = "null_as_default")]
    pub operator_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service: String,
    #[serde(skip_serializing_if = "Flexible::is_absent")]
    pub platform: Flexible,
    #[serde(deserialize_with = "null_as_default")]
    pub platform_changed: bool,
    #[serde(skip_serializing_if = "Flexible::is_absent")]
    pub remark: Flexible,
    #[serde(deserialize_with = "null_as_default")]
    pub realtime_state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub realtime_text: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Mode {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// A field whose JSON type the upstream API does not pin down: it may be
/// missing, `null`, a single value, a list of values or anything else.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(untagged)]
pub enum Flexible {
    #[default]
    Absent,
    One(Scalar),
    Many(Vec<Scalar>),
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Flexible {
    pub fn is_absent(&self) -> bool {
        matches!(self, Flexible::Absent)
    }
}

/// Present-but-`null` decodes like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sensor registry for the Salt Lake County rain-flow stream network.
///
/// Defines the canonical list of sensor pages monitored by this service and
/// the builder that decodes each configuration URI into a `SensorDescriptor`.
/// The URI query string carries four ordered parameters:
///
/// ```text
/// https://rain-flow.slco.org/sensor/?site_id=76&site=<uuid>&device_id=2&device=<uuid>
/// ```

use crate::model::{ConfigurationError, SensorDescriptor};

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// A sensor as configured: display name plus configuration URI.
pub struct SensorEntry {
    pub name: &'static str,
    pub uri: &'static str,
}

/// All monitored stream sensors, grouped by creek.
///
/// Source: rain-flow.slco.org sensor pages.
pub static SENSOR_REGISTRY: &[SensorEntry] = &[
    SensorEntry {
        name: "Mill Creek @ Canyon Mouth",
        uri: "https://rain-flow.slco.org/sensor/?site_id=76&site=3ea01878-b85b-497b-8db5-03654e886f0a&device_id=2&device=a070b1c1-1dd2-47af-b810-f5d5b0d6ba7f",
    },
    SensorEntry {
        name: "Mill Creek @ 460 West",
        uri: "https://rain-flow.slco.org/sensor/?site_id=82&site=07368bfd-e9e1-4d61-865b-11ac14719ba7&device_id=2&device=0c8aad55-53e1-41d8-bff2-97f37e281ebc",
    },
    SensorEntry {
        name: "Red Butte Creek @ Fort Douglas",
        uri: "https://rain-flow.slco.org/sensor/?site_id=106&site=78136973-f7c1-4659-909c-1f3a22cfcfcc&device_id=1&device=c4d6caba-0e0a-4ffc-b57b-a2c06a803182",
    },
    SensorEntry {
        name: "Red Butte Creek @ Miller Park",
        uri: "https://rain-flow.slco.org/sensor/?site_id=88&site=0f63146a-3f02-411a-b20e-f2aabfcffbf9&device_id=4&device=ecd6c378-486d-4a87-ac25-9ecc1de14541",
    },
    SensorEntry {
        name: "Big Cottonwood Creek @ 300 West",
        uri: "https://rain-flow.slco.org/sensor/?site_id=81&site=a81f0cf5-e702-4dab-a238-622d557f9465&device_id=2&device=154b557c-4ff7-4c57-b550-db185d9b3899",
    },
    SensorEntry {
        name: "Big Cottonwood Creek @ Canyon Mouth",
        uri: "https://rain-flow.slco.org/sensor/?site_id=67&site=7b550c74-37e9-4af7-8d6a-3b6afe73013c&device_id=2&device=a18d9df7-3902-40e4-b509-a5be73a0540f",
    },
    SensorEntry {
        name: "Big Cottonwood Creek @ Cottonwood Lane",
        uri: "https://rain-flow.slco.org/sensor/?site_id=73&site=58359497-613a-46e0-a3a4-8d13fa1da5d7&device_id=2&device=06060a22-2457-41b6-a482-c234c0d5a723",
    },
    SensorEntry {
        name: "Big Cottonwood Creek @ Creekside Park",
        uri: "https://rain-flow.slco.org/sensor/?site_id=79&site=cfa2f1cc-84be-4b70-b396-8bdc03969eb4&device_id=2&device=d104b73e-ddce-440e-92aa-e4ed4fb2ca30",
    },
    SensorEntry {
        name: "Little Cottonwood Creek @ 300 West",
        uri: "https://rain-flow.slco.org/sensor/?site_id=80&site=f4ca7320-4f72-4552-b822-cb53e0fde0eb&device_id=2&device=03cfc591-bccc-4253-8125-c666cc81ba01",
    },
    SensorEntry {
        name: "Little Cottonwood Creek @ Crestwood Park",
        uri: "https://rain-flow.slco.org/sensor/?site_id=68&site=13f042c2-8e64-4209-85b2-f9c2fb431045&device_id=2&device=9c18f370-4af5-49eb-b893-aafdad0572d4",
    },
    SensorEntry {
        name: "Little Cottonwood Creek @ Tanners Flat",
        uri: "https://rain-flow.slco.org/sensor/?site_id=111&site=356eff27-b9e1-4585-bb4f-cd946469a294&device_id=3&device=4ee002b8-afa2-4d83-ad9e-9ffee95ca81d",
    },
    SensorEntry {
        name: "Parleys Creek @ Canyon Mouth",
        uri: "https://rain-flow.slco.org/sensor/?site_id=77&site=c220db0d-a67d-4f0a-a04c-211d1ad0b7a3&device_id=2&device=9d7b0e6d-a81e-4800-a4a6-e972f6c1bf22",
    },
    SensorEntry {
        name: "Parleys Creek @ Hidden Hollow",
        uri: "https://rain-flow.slco.org/sensor/?site_id=114&site=6d720eee-8279-4e06-9841-a65b172f5e9f&device_id=2&device=5aa3e814-a23a-4553-9da0-5269295de45a",
    },
    SensorEntry {
        name: "Bingham Creek @ Jordan River",
        uri: "https://rain-flow.slco.org/sensor/?site_id=71&site=eaf7aa1d-41c6-46e8-9fcb-042180ca4285&device_id=2&device=eecb3725-bd20-4b0b-8dac-0b728381749d",
    },
    SensorEntry {
        name: "City Creek @ Memory Grove",
        uri: "https://rain-flow.slco.org/sensor/?site_id=91&site=2032a5a2-d405-4a30-a316-43d67817d0f6&device_id=2&device=093badfa-eba1-4997-a4a8-a12062b3fb8e",
    },
    SensorEntry {
        name: "Emigration Creek @ Canyon Mouth",
        uri: "https://rain-flow.slco.org/sensor/?site_id=86&site=0cad105f-39a4-42ba-ab1e-f43334c20428&device_id=2&device=1e4e2a0f-a6bc-4f9e-98d3-fe3afc3df01b",
    },
    SensorEntry {
        name: "Emigration Creek @ Westminster",
        uri: "https://rain-flow.slco.org/sensor/?site_id=112&site=893e2c83-b714-43b1-a371-34f43f1639dc&device_id=3&device=3efc26fc-38ee-486c-8506-7ed4c7117da4",
    },
    SensorEntry {
        name: "Midas Creek @ Jordan River",
        uri: "https://rain-flow.slco.org/sensor/?site_id=62&site=6d346231-a49e-4fab-a923-e53bb15a2d5f&device_id=2&device=c468ac53-9995-4c1c-9964-2b152fcd1d51",
    },
    SensorEntry {
        name: "Jordan River Surplus Canal",
        uri: "https://rain-flow.slco.org/sensor/?site_id=104&site=95e8754c-f507-449a-80be-f9445f920c83&device_id=1&device=3d7ac51a-ea2d-436b-8582-9c2d63568ef9",
    },
    SensorEntry {
        name: "Jordan River @ 9000 South",
        uri: "https://rain-flow.slco.org/sensor/?site_id=92&site=a3b813d4-939e-4d08-bab3-3159107c833a&device_id=2&device=cacc90fd-9e26-418e-a401-0e746a2bb3a4",
    },
    SensorEntry {
        name: "Jordan River @ 4800 S",
        uri: "https://rain-flow.slco.org/sensor/?site_id=113&site=5da40f55-6b89-49f3-b4ec-2e87c96105e8&device_id=3&device=0857c736-1991-45e5-9223-517ef8da1589",
    },
    SensorEntry {
        name: "Jordan River @ 1700 South",
        uri: "https://rain-flow.slco.org/sensor/?site_id=105&site=21afb147-64bc-4661-8f7a-fbe6fb964932&device_id=1&device=72d43427-9a29-4479-93d0-d2fa15acd6dc",
    },
    // Shares the 9000 South device until the 500 North gauge gets its own page.
    SensorEntry {
        name: "Jordan River @ 500 North",
        uri: "https://rain-flow.slco.org/sensor/?site_id=92&site=a3b813d4-939e-4d08-bab3-3159107c833a&device_id=2&device=cacc90fd-9e26-418e-a401-0e746a2bb3a4",
    },
];

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Decodes a sensor configuration URI into a `SensorDescriptor`.
///
/// The four query parameters are taken by position; their values are
/// percent-decoded. The URI itself is kept verbatim as the fetch target.
///
/// # Errors
/// `ConfigurationError` if the URI has no `/?` separator, fewer than four
/// `&`-separated parameters, a parameter without `=`, or an empty value.
pub fn build_sensor(name: &str, uri: &str) -> Result<SensorDescriptor, ConfigurationError> {
    let (_, query) = uri
        .split_once("/?")
        .ok_or_else(|| ConfigurationError::MissingQuery { uri: uri.to_string() })?;

    let mut tokens = query.split('&');
    let mut next_value = |key| query_value(uri, key, tokens.next());

    Ok(SensorDescriptor {
        name: name.to_string(),
        site_id: next_value("site_id")?,
        site: next_value("site")?,
        device_id: next_value("device_id")?,
        device: next_value("device")?,
        uri: uri.to_string(),
    })
}

/// Decodes the value of one `key=value` query token.
fn query_value(
    uri: &str,
    key: &'static str,
    token: Option<&str>,
) -> Result<String, ConfigurationError> {
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ConfigurationError::MissingParameter { uri: uri.to_string(), key })?;

    let malformed = || ConfigurationError::MalformedParameter {
        uri: uri.to_string(),
        token: token.to_string(),
    };

    match token.split_once('=') {
        Some((_, raw)) if !raw.is_empty() => urlencoding::decode(raw)
            .map(|value| value.into_owned())
            .map_err(|_| malformed()),
        _ => Err(malformed()),
    }
}

/// Builds descriptors for every entry in `SENSOR_REGISTRY`, in order.
pub fn build_registry() -> Result<Vec<SensorDescriptor>, ConfigurationError> {
    SENSOR_REGISTRY
        .iter()
        .map(|entry| build_sensor(entry.name, entry.uri))
        .collect()
}

/// Looks up a registry entry by display name. Returns `None` if not found.
pub fn find_sensor(name: &str) -> Option<&'static SensorEntry> {
    SENSOR_REGISTRY.iter().find(|s| s.name == name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

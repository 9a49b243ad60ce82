//! Bodies as the dataset server and the world-atlas CDN actually send them.

use api::{decode_dataset, fields, DataClient, Topology};

const USERS_BODY: &str = r#"{
    "message": "Hello from the backend!",
    "data": [
        {
            "Country": "France",
            "Account Created At": "2012-05-01T10:00:00Z",
            "Most Used Language": "Go",
            "Hireable": true,
            "Repositories Count": 12,
            "Unique Topics": "['cli', 'web']"
        },
        {
            "Country": "Japan",
            "Account Created At": "2015-09-09 08:30:00",
            "Most Used Language": "Rust",
            "Hireable": "False",
            "Repositories Count": "3",
            "Unique Topics": ["wasm"]
        },
        {
            "Country": null,
            "Account Created At": "",
            "Most Used Language": "NaN",
            "Hireable": null,
            "Repositories Count": null,
            "Unique Topics": null
        }
    ]
}"#;

#[test]
fn users_body_decodes_with_lenient_fields() {
    let dataset = decode_dataset(USERS_BODY.as_bytes()).unwrap();
    assert_eq!(dataset.len(), 3);

    let japan = &dataset[1];
    assert_eq!(japan.text(fields::COUNTRY).as_deref(), Some("Japan"));
    assert_eq!(japan.flag(fields::HIREABLE), Some(false));
    assert_eq!(japan.number(fields::REPOSITORIES), Some(3.0));

    let blank = &dataset[2];
    assert_eq!(blank.text(fields::COUNTRY), None);
    assert_eq!(blank.text(fields::CREATED_AT), None);
    assert_eq!(blank.number(fields::REPOSITORIES), None);
}

#[test]
fn iris_rows_use_generic_accessors() {
    let body = br#"[
        {"Id": 1, "SepalLengthCm": 5.1, "SepalWidthCm": 3.5, "Species": "Iris-setosa"},
        {"Id": 51, "SepalLengthCm": "7.0", "SepalWidthCm": 3.2, "Species": "Iris-versicolor"}
    ]"#;
    let dataset = decode_dataset(body).unwrap();

    assert_eq!(dataset[0].text(fields::SPECIES).as_deref(), Some("Iris-setosa"));
    assert_eq!(dataset[1].number(fields::SEPAL_LENGTH), Some(7.0));
    assert_eq!(dataset[1].text("Id").as_deref(), Some("51"));
}

#[test]
fn world_topology_flattens_to_named_features() {
    let topology: Topology = serde_json::from_str(
        r#"{
            "type": "Topology",
            "arcs": [[[-5.0, 42.0], [8.0, 42.0], [8.0, 51.0], [-5.0, 51.0], [-5.0, 42.0]]],
            "objects": {
                "countries": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Polygon", "id": "250", "arcs": [[0]], "properties": {"name": "France"}},
                        {"type": "Polygon", "id": "999", "arcs": [[-1]]}
                    ]
                }
            }
        }"#,
    )
    .unwrap();

    let atlas = topology.countries().unwrap();
    assert_eq!(atlas.len(), 2);
    assert_eq!(atlas[0].name, "France");
    assert_eq!(atlas[0].polygons[0][0].len(), 5);
    // Unnamed features fall back to their id.
    assert_eq!(atlas[1].name, "999");
}

#[test]
fn client_targets_the_data_route() {
    let client = DataClient::new("http://127.0.0.1:3000/api");
    assert_eq!(client.base_url(), "http://127.0.0.1:3000/api");
    assert_eq!(client.data_url(), "http://127.0.0.1:3000/api/data");
}

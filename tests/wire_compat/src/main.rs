fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use webconsole_protocol::{Ack, Op, Request};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Deserializes a fixture into a Rust type, re-serializes it, and
    /// compares the JSON values. The fixtures are the shim's canonical
    /// frames — any divergence here breaks the browser side.
    fn roundtrip_test<T>(name: &str)
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));

        assert_eq!(
            fixture, reserialized,
            "roundtrip mismatch for {name}:\n  shim: {fixture}\n  Rust: {reserialized}"
        );
    }

    // --- Request frames ---

    #[test]
    fn fixture_request_log() {
        roundtrip_test::<Request>("request_log.json");
    }

    #[test]
    fn fixture_request_clear_no_args() {
        roundtrip_test::<Request>("request_clear.json");
        // No-argument calls must omit `args` entirely.
        let fixture = load_fixture("request_clear.json");
        assert!(fixture.get("args").is_none());
    }

    #[test]
    fn fixture_request_count_labeled() {
        roundtrip_test::<Request>("request_count_labeled.json");
    }

    #[test]
    fn fixture_request_group() {
        roundtrip_test::<Request>("request_group.json");
    }

    #[test]
    fn fixture_request_table() {
        roundtrip_test::<Request>("request_table.json");
        // The sequence rides as one positional argument, order intact.
        let req: Request = serde_json::from_value(load_fixture("request_table.json")).unwrap();
        assert_eq!(req.op, Op::Table);
        assert_eq!(req.args.len(), 1);
        let rows = req.args[0].as_array().unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn fixture_request_dir() {
        roundtrip_test::<Request>("request_dir.json");
    }

    // --- Ack frames ---

    #[test]
    fn fixture_ack_ok() {
        roundtrip_test::<Ack>("ack_ok.json");
        let fixture = load_fixture("ack_ok.json");
        assert!(fixture.get("error").is_none());
    }

    #[test]
    fn fixture_ack_error() {
        roundtrip_test::<Ack>("ack_error.json");
        let ack: Ack = serde_json::from_value(load_fixture("ack_error.json")).unwrap();
        let err = ack.error.unwrap();
        assert_eq!(err.code, -32000);
    }

    // --- Operation names ---

    #[test]
    fn fixture_op_names_complete() {
        // The shim dispatches on these exact strings. The fixture lists
        // every operation it implements; both sides must agree.
        let fixture = load_fixture("op_names.json");
        let names: Vec<&str> = fixture
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        let ours: Vec<&str> = Op::ALL.iter().map(|op| op.as_str()).collect();
        assert_eq!(names, ours);
    }

    #[test]
    fn every_op_parses_from_its_wire_name() {
        for op in Op::ALL {
            let json = format!("\"{}\"", op.as_str());
            let parsed: Op = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, op);
        }
    }
}

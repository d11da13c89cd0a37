mod common;

use common::TestEnv;
use serde_json::Value;

fn approx(v: &Value, expected: f64) {
    let got = v.as_f64().expect("number");
    assert!(
        (got - expected).abs() < 1e-6,
        "expected {expected}, got {got}"
    );
}

#[test]
fn create_layer_edit_recomputes_totals() {
    let env = TestEnv::new();

    let created = env.run_json(&["create", "Cavity Wall"]);
    assert_eq!(created["ok"], true);
    assert_eq!(created["data"]["name"], "Cavity Wall");

    // blockwork: 1800 kg/m3, ecf 0.12/0.02, 100mm
    let added = env.run_json(&[
        "layer", "add", "Cavity Wall", "--material", "concrete-block", "--thickness", "100",
    ]);
    approx(&added["data"]["totals"]["mass_per_area"], 180.0);
    approx(&added["data"]["totals"]["carbon_inc_biogenic"], 21.6);
    approx(&added["data"]["totals"]["carbon_biogenic"], 3.6);
    approx(&added["data"]["layers"][0]["carbon_exc_biogenic"], 18.0);

    let added2 = env.run_json(&[
        "layer", "add", "Cavity Wall", "--material", "mineral-wool", "--thickness", "50",
    ]);
    approx(&added2["data"]["totals"]["thickness_mm"], 150.0);
    approx(&added2["data"]["totals"]["mass_per_area"], 183.0);
    approx(&added2["data"]["totals"]["carbon_inc_biogenic"], 25.2);

    // editing a layer replaces the totals wholesale
    let edited = env.run_json(&["layer", "set", "Cavity Wall", "1", "--thickness", "100"]);
    approx(&edited["data"]["totals"]["thickness_mm"], 200.0);
    approx(&edited["data"]["totals"]["mass_per_area"], 186.0);
    approx(&edited["data"]["totals"]["carbon_inc_biogenic"], 28.8);

    let removed = env.run_json(&["layer", "remove", "Cavity Wall", "1"]);
    approx(&removed["data"]["totals"]["mass_per_area"], 180.0);
    approx(&removed["data"]["totals"]["carbon_inc_biogenic"], 21.6);

    let shown = env.run_json(&["show", "Cavity Wall"]);
    assert_eq!(shown["data"]["layers"].as_array().expect("layers").len(), 1);
}

#[test]
fn duplicate_names_get_incrementing_suffix() {
    let env = TestEnv::new();

    let first = env.run_json(&["create", "Wall"]);
    assert_eq!(first["data"]["name"], "Wall");

    let second = env.run_json(&["create", "Wall"]);
    assert_eq!(second["data"]["name"], "Wall (2)");

    let third = env.run_json(&["create", "Wall"]);
    assert_eq!(third["data"]["name"], "Wall (3)");

    let list = env.run_json(&["list"]);
    assert_eq!(list["data"].as_array().expect("buildups").len(), 3);
}

#[test]
fn tag_and_tree_classification_flow() {
    let env = TestEnv::new();

    env.run_json(&["create", "Ext Wall"]);
    env.run_json(&["tag", "add", "Ext Wall", "2.5.1"]);
    env.run_json(&["create", "Mystery"]);
    env.run_json(&["tag", "add", "Mystery", "9.9.9"]);
    env.run_json(&["create", "Untagged"]);

    let tree = env.run_json(&["tree"]);
    let root = &tree["data"];
    let top: Vec<&str> = root["children"]
        .as_array()
        .expect("children")
        .iter()
        .map(|c| c["label"].as_str().expect("label"))
        .collect();
    assert_eq!(top, vec!["1 Substructure", "2 Superstructure", "Uncategorized"]);

    let superstructure = &root["children"][1];
    assert_eq!(superstructure["subtree_count"], 1);
    assert_eq!(superstructure["assigned"].as_array().expect("assigned").len(), 0);

    // sibling order is numeric: 2.10 sorts after 2.5
    let labels: Vec<&str> = superstructure["children"]
        .as_array()
        .expect("children")
        .iter()
        .map(|c| c["label"].as_str().expect("label"))
        .collect();
    assert_eq!(
        labels,
        vec!["2.1 Frame", "2.2 Upper floors", "2.5 External walls", "2.10 Mast structures"]
    );

    let walls = &superstructure["children"][2];
    assert_eq!(walls["subtree_count"], 1);
    assert_eq!(walls["assigned"].as_array().expect("assigned").len(), 0);
    let leaf = &walls["children"][0];
    assert_eq!(leaf["label"], "2.5.1 Walls above ground");
    assert_eq!(leaf["assigned"][0], "Ext Wall");

    let uncategorized = &root["children"][2];
    let names: Vec<&str> = uncategorized["assigned"]
        .as_array()
        .expect("assigned")
        .iter()
        .map(|n| n.as_str().expect("name"))
        .collect();
    assert!(names.contains(&"Mystery"));
    assert!(names.contains(&"Untagged"));
    assert_eq!(uncategorized["subtree_count"], 2);
}

#[test]
fn contribution_reports_unclamped_percentages() {
    let env = TestEnv::new();

    env.run_json(&["create", "Hybrid Wall"]);
    env.run_json(&[
        "layer", "add", "Hybrid Wall", "--material", "concrete-block", "--thickness", "100",
    ]);
    // timber layer: exc = 16.8 - 33.6 = -16.8, cancelling most of the blockwork
    env.run_json(&[
        "layer", "add", "Hybrid Wall", "--material", "timber-clt", "--thickness", "100",
    ]);

    let report = env.run_json(&["contribution", "Hybrid Wall", "--layers", "1"]);
    let data = &report["data"];
    approx(&data["total_product_stage"], 1.2);
    approx(&data["toggled_product_stage"], -16.8);
    approx(&data["total_biogenic"], -37.2);
    approx(&data["toggled_biogenic"], -33.6);

    // opposing-sign subset legitimately exceeds 100%; must not be clamped
    approx(&data["bars"]["product_stage"]["toggled_percent"], 1400.0);
    assert_eq!(data["bars"]["biogenic"]["below_center"], true);
    assert_eq!(data["bars"]["product_stage"]["below_center"], false);
}

#[test]
fn unknown_buildup_yields_error_envelope() {
    let env = TestEnv::new();

    let mut cmd = env.cmd();
    let out = cmd
        .arg("--json")
        .args(["show", "Nope"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let err: Value = serde_json::from_slice(&out).expect("error json output");
    assert_eq!(err["ok"], false);
    assert_eq!(err["error"]["code"], "BUILDUP_NOT_FOUND");
    let msg = err["error"]["message"].as_str().unwrap_or("");
    assert!(msg.contains("build-up not found"));
}

#[test]
fn unknown_material_is_rejected_at_layer_add() {
    let env = TestEnv::new();

    env.run_json(&["create", "Wall"]);

    let mut cmd = env.cmd();
    let out = cmd
        .arg("--json")
        .arg("--catalog")
        .arg(env.catalog.to_str().expect("catalog path utf8"))
        .args(["layer", "add", "Wall", "--material", "unobtainium"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let err: Value = serde_json::from_slice(&out).expect("error json output");
    assert_eq!(err["error"]["code"], "MATERIAL_NOT_FOUND");
}

#[test]
fn remove_cycle_empties_the_collection() {
    let env = TestEnv::new();

    env.run_json(&["create", "Wall"]);
    let removed = env.run_json(&["remove", "Wall"]);
    assert_eq!(removed["data"], 1);

    let list = env.run_json(&["list"]);
    assert_eq!(list["data"].as_array().expect("buildups").len(), 0);

    // mutations leave an audit trail
    let audit = env.home.join(".config/buildup/audit.jsonl");
    let log = std::fs::read_to_string(audit).expect("audit log");
    assert!(log.lines().any(|l| l.contains("\"create\"")));
    assert!(log.lines().any(|l| l.contains("\"remove\"")));
}

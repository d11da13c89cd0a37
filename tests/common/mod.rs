use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub catalog: PathBuf,
    pub taxonomy: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let catalog = make_fixture_catalog(tmp.path());
        let taxonomy = make_fixture_taxonomy(tmp.path());

        Self {
            _tmp: tmp,
            home,
            catalog,
            taxonomy,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("buildup").expect("buildup binary");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--catalog")
            .arg(self.catalog.to_str().expect("catalog path utf8"))
            .arg("--taxonomy")
            .arg(self.taxonomy.to_str().expect("taxonomy path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

fn make_fixture_catalog(base: &Path) -> PathBuf {
    let dir = base.join("catalog");
    fs::create_dir_all(&dir).expect("create catalog dir");

    let catalog = serde_json::json!({
        "name": "fixture-catalog",
        "materials": [
            {
                "key": "concrete-block",
                "group_name": "Masonry",
                "density": 1800.0,
                "ecf_inc_biogenic": 0.12,
                "ecf_biogenic": 0.02
            },
            {
                "key": "timber-clt",
                "group_name": "Timber",
                "density": 480.0,
                "ecf_inc_biogenic": 0.35,
                "ecf_biogenic": 0.70
            },
            {
                "key": "mineral-wool",
                "group_name": "Insulation",
                "density": 60.0,
                "ecf_inc_biogenic": 1.2,
                "ecf_biogenic": 0.0
            }
        ]
    });
    fs::write(
        dir.join("catalog.json"),
        serde_json::to_string_pretty(&catalog).expect("serialize catalog"),
    )
    .expect("write catalog");
    dir
}

fn make_fixture_taxonomy(base: &Path) -> PathBuf {
    let path = base.join("taxonomy.json");
    let taxonomy = serde_json::json!({
        "1 Substructure": {},
        "2 Superstructure": {
            "2.1 Frame": {},
            "2.2 Upper floors": {},
            "2.10 Mast structures": {},
            "2.5 External walls": {
                "2.5.1 Walls above ground": {},
                "2.5.2 Walls below ground": {}
            }
        }
    });
    fs::write(
        &path,
        serde_json::to_string_pretty(&taxonomy).expect("serialize taxonomy"),
    )
    .expect("write taxonomy");
    path
}

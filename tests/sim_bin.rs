use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "2"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"].as_array().map(Vec::len), Some(10));
    assert_eq!(v["summary"]["games"], 10);
    let a = &v["summary"]["a"];
    let total = a["wins"].as_u64().unwrap() + a["draws"].as_u64().unwrap() + a["losses"].as_u64().unwrap();
    assert_eq!(total, 10);
}

#[test]
fn sim_binary_is_deterministic() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["5", "9"])
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn sim_binary_rejects_missing_seeds() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("1")
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn crowdring_cmd() -> Command {
    let mut cmd = Command::cargo_bin("crowdring").unwrap();
    cmd.env_remove("CROWDRING_ROOT");
    cmd.env_remove("CROWDRING_LOG");
    cmd
}

#[allow(dead_code)]
pub fn write_roster(root: &Path, name: &str, contents: &str) {
    let roster = root.join("ringers");
    fs::create_dir_all(&roster).unwrap();
    fs::write(roster.join(name), contents).unwrap();
}

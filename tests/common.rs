use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

pub const EDGES: &str = "\
LocationID_1,LocationID_2,Name_1,Name_2,Time
16,5,Hume Hall,Reitz Union,5
5,14,Reitz Union,Marston Library,4
16,40,Hume Hall,Broward Hall,6
40,50,Broward Hall,Little Hall,7
14,49,Marston Library,Turlington Hall,3
49,55,Turlington Hall,Newell Hall,2
";

pub const CLASSES: &str = "\
ClassCode,LocationID,Start Time (HH:MM),End Time (HH:MM)
COP3530,14,10:40,11:30
CDA3101,5,09:35,10:25
MAC2311,50,11:45,12:35
EEL3701,55,01:55 PM,02:45 PM
";

pub fn campusnet() -> Command {
    let mut cmd = cargo_bin_cmd!("campusnet");
    // Keep the user's own config out of the tests
    cmd.env("CAMPUSNET_CONFIG_DIR", "/nonexistent/campusnet-tests");
    cmd.env_remove("CAMPUSNET_CONFIG");
    cmd.env_remove("CAMPUSNET_LOG");
    cmd
}

/// Write the sample network under `dir/data/` where the default config looks
pub fn write_campus(dir: &Path) {
    let data = dir.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("edges.csv"), EDGES).unwrap();
    fs::write(data.join("classes.csv"), CLASSES).unwrap();
}

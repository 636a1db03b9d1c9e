use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn zero_file_arguments_is_a_usage_error() {
    let env = TestEnv::new();
    env.cmd()
        .assert()
        .failure()
        .stderr(contains("Usage"))
        .stderr(contains("FILE"));
}

#[test]
fn help_describes_the_file_arguments() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("cue-sheet CSV files"));
}

#[test]
fn finding_duplicates_still_exits_zero() {
    let env = TestEnv::new();
    let sheet = env.sheet("dup.csv", &["1,1,a", "1,1,b"]);
    env.cmd()
        .arg(&sheet)
        .assert()
        .success()
        .stdout(contains("DUPLICATE PAIR FOUND: Channel 1, Cue 1"));
}

#[test]
fn clean_run_exits_zero_with_success_line() {
    let env = TestEnv::new();
    let sheet = env.sheet("clean.csv", &["1,1,a", "2,2,b"]);
    env.cmd().arg(&sheet).assert().success().stdout(contains(
        "SUCCESS: No duplicate (#Channel, #Cue) pairs were found across any of the files.",
    ));
}

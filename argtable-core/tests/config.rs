use std::io::Write;

use argtable_core::{ArgumentTable, ConfigFile, Error, Origin};
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn config_fills_in_missing_keys() {
    let file = config_file("rpcport = 8332\nserver = true\nrpcuser = \"alice\"\n");
    let config = ConfigFile::load(file.path()).unwrap();

    let table = ArgumentTable::parse_with_config(["node", "-debug"], &config);
    assert_eq!(table.get_arg("-rpcport", 0), 8332i64);
    assert!(table.get_bool_arg("-server", false));
    assert_eq!(table.get_arg("-rpcuser", ""), "alice");
    assert!(table.is_set("-debug"));
}

#[test]
fn command_line_beats_config_file() {
    let config: ConfigFile = "rpcport = 8332\nlisten = true\n".parse().unwrap();

    let table = ArgumentTable::parse_with_config(["node", "-rpcport=18332", "-nolisten"], &config);
    assert_eq!(table.get_arg("-rpcport", 0), 18332i64);
    assert!(!table.get_bool_arg("-listen", true));

    let origins: Vec<_> = table.entries("-rpcport").iter().map(|e| e.origin()).collect();
    assert_eq!(origins, vec![Origin::CommandLine, Origin::ConfigFile]);
}

#[test]
fn multi_values_combine_both_sources() {
    let config: ConfigFile = "addnode = [\"10.0.0.2\", \"10.0.0.3\"]\n".parse().unwrap();

    let table = ArgumentTable::parse_with_config(["node", "-addnode=10.0.0.1"], &config);
    assert_eq!(
        table.get_args("-addnode"),
        vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"]
    );
    assert_eq!(table.get_arg("-addnode", ""), "10.0.0.1");
}

#[test]
fn conf_flag_locates_the_file() {
    let file = config_file("maxconnections = 16\n");
    let path = file.path().to_string_lossy().into_owned();
    let argv = vec!["node".to_string(), format!("-conf={path}")];

    let bootstrap = ArgumentTable::parse(&argv);
    let config = ConfigFile::load(bootstrap.config_path("node.toml")).unwrap();
    let table = ArgumentTable::parse_with_config(&argv, &config);

    assert_eq!(table.get_arg("-maxconnections", 125), 16i64);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigFile::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

use argtext::{token_enum, CommandLine, TokenEnum};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Fruit {
    None = 0,
    Banana = 1,
    Apple = 2,
    Coconut = 4,
    Pineapple = 8,
    Kiwi = 16,
}
token_enum!(Fruit { None, Banana, Apple, Coconut, Pineapple, Kiwi });

/// Any combination of [`Fruit`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Fruits(i64);

impl TokenEnum for Fruits {
    fn variants() -> &'static [(&'static str, i64)] {
        Fruit::variants()
    }
    fn to_bits(self) -> i64 {
        self.0
    }
    fn from_bits(bits: i64) -> Option<Self> {
        (0..32).contains(&bits).then_some(Fruits(bits))
    }
}

const SAMPLE: &str = "-Fruit Pineapple -Fruits \"Apple, Coconut, Kiwi\" -Int 1337 // c\n-NegativeInt -7331";

#[test]
fn test_example_tokens() {
    let cmd = CommandLine::parse(SAMPLE);
    assert_eq!(
        cmd.tokens(),
        [
            "-Fruit",
            "Pineapple",
            "-Fruits",
            "Apple, Coconut, Kiwi",
            "-Int",
            "1337",
            "-NegativeInt",
            "-7331",
        ]
    );
}

#[test]
fn test_example_lookups() {
    let cmd = CommandLine::parse(SAMPLE);
    assert_eq!(cmd.get_enum("-Fruit", Fruit::None), Fruit::Pineapple);
    assert_eq!(cmd.get_int("-Int", 0), 1337);
    assert_eq!(cmd.get_int("-NegativeInt", 0), -7331);
    assert_eq!(cmd.get_float("-Int", 0.0), 1337.0);
    assert_eq!(cmd.get_string("-Fruits", ""), "Apple, Coconut, Kiwi");
}

#[test]
fn test_flag_enum_combines_names() {
    let cmd = CommandLine::parse(SAMPLE);
    assert_eq!(cmd.get_enum("-Fruits", Fruits(0)), Fruits(2 | 4 | 16));
}

#[test]
fn test_plain_enum_rejects_combination() {
    let cmd = CommandLine::parse(SAMPLE);
    assert_eq!(cmd.get_enum("-Fruits", Fruit::Banana), Fruit::Banana);
}

#[test]
fn test_enum_types_do_not_share_cache() {
    let cmd = CommandLine::parse("-Fruit kiwi");
    assert_eq!(cmd.get_enum("-Fruit", Fruit::None), Fruit::Kiwi);
    assert_eq!(cmd.get_enum("-Fruit", Fruits(0)), Fruits(16));
    assert_eq!(cmd.cached_len(), 2);
}

#[test]
fn test_quoted_multi_word() {
    let cmd = CommandLine::parse(r#"-Key "Hello World""#);
    assert_eq!(cmd.get_string("-Key", ""), "Hello World");
}

#[test]
fn test_bool_tokens() {
    let cmd = CommandLine::parse("-a 1 -b 0 -c true -d false -e anythingElse");
    let got: Vec<bool> = ["-a", "-b", "-c", "-d", "-e"]
        .iter()
        .map(|k| cmd.get_bool(k, false))
        .collect();
    assert_eq!(got, [true, false, true, false, true]);
}

#[test]
fn test_case_insensitive_keys() {
    let cmd = CommandLine::parse(SAMPLE);
    assert_eq!(cmd.get_int("-int", 0), cmd.get_int("-INT", 0));
    assert!(cmd.has_key("-fruit"));
}

#[test]
fn test_keys_use_simple_case_mapping() {
    let cmd = CommandLine::parse("-Straße 1 -ﬁle x -Ünï 2");
    assert_eq!(cmd.get_int("-STRASSE", 0), 0);
    assert_eq!(cmd.get_string("-FILE", "none"), "none");
    assert!(!cmd.has_key("-FILE"));
    assert_eq!(cmd.get_int("-üNÏ", 0), 2);
}

#[test]
fn test_missing_key_returns_each_callers_default() {
    let cmd = CommandLine::parse(SAMPLE);
    assert_eq!(cmd.get_string("-Missing", "A"), "A");
    assert_eq!(cmd.get_string("-Missing", "B"), "B");
    assert_eq!(cmd.cached_len(), 0);
}

#[test]
fn test_reinit_is_idempotent() {
    let mut cmd = CommandLine::parse(SAMPLE);
    let first = cmd.tokens().to_vec();
    cmd.get_int("-Int", 0);
    cmd.init(SAMPLE);
    assert_eq!(cmd.tokens(), first);
    assert_eq!(cmd.cached_len(), 0);
}

#[test]
fn test_load_file() {
    let path = std::env::temp_dir().join(format!("argtext-e2e-{}.txt", std::process::id()));
    std::fs::write(&path, SAMPLE).unwrap();
    let mut cmd = CommandLine::default();
    cmd.load_file(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(cmd.get_int("-NegativeInt", 0), -7331);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let mut cmd = CommandLine::default();
    let err = cmd.load_file("/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, argtext::errors::ArgError::Io(_)));
}

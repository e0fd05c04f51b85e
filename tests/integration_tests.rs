use serde::{Deserialize, Serialize};
use serde_xini::{
    decode, from_reader, from_slice, from_str, from_value, to_string, to_string_with_options,
    to_value, to_writer, Document, EncodeOptions, Error, ListSeparator, Value,
};
use std::collections::{BTreeMap, HashMap};
use std::io::Cursor;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Database {
    host: String,
    port: u16,
    replicas: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Level {
    Debug,
    Info,
    Warn,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct AppConfig {
    name: String,
    version: String,
    level: Level,
    timeout: f64,
    motd: String,
    database: Database,
    limits: HashMap<String, u32>,
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let ini = to_string(&user).unwrap();
    println!("User INI:\n{}", ini);

    let user_back: User = from_str(&ini).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_struct_becomes_section() {
    let mut limits = HashMap::new();
    limits.insert("cpu".to_string(), 2);

    let config = AppConfig {
        name: "demo".to_string(),
        version: "1.0".to_string(),
        level: Level::Info,
        timeout: 2.5,
        motd: "welcome\nto the demo".to_string(),
        database: Database {
            host: "localhost".to_string(),
            port: 5432,
            replicas: vec!["r1".to_string(), "r2".to_string()],
        },
        limits,
    };

    let ini = to_string(&config).unwrap();
    assert_eq!(
        ini,
        "name = demo\n\
         version = \"1.0\"\n\
         level = info\n\
         timeout = 2.5\n\
         motd = '''\nwelcome\nto the demo\n'''\n\
         \n\
         [database]\n\
         host = localhost\n\
         port = 5432\n\
         replicas = [r1, r2]\n\
         \n\
         [limits]\n\
         cpu = 2\n"
    );

    let back: AppConfig = from_str(&ini).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_hand_written_config() {
    let ini = "
; application settings
name = demo
version = 2
level = warn
timeout = 30
motd = '''
hello
'''

[database]
host = db.local
port = 5432
replicas[] = a
replicas[] = b

[limits]
cpu = 4
mem = 512
";

    let config: AppConfig = from_str(ini).unwrap();
    assert_eq!(config.version, "2");
    assert_eq!(config.level, Level::Warn);
    assert_eq!(config.timeout, 30.0);
    assert_eq!(config.motd, "hello");
    assert_eq!(config.database.replicas, vec!["a", "b"]);
    assert_eq!(config.limits.get("mem"), Some(&512));
}

#[test]
fn test_optional_fields() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Settings {
        name: String,
        nickname: Option<String>,
        retries: Option<u8>,
    }

    let settings = Settings {
        name: "x".to_string(),
        nickname: None,
        retries: Some(3),
    };

    let ini = to_string(&settings).unwrap();
    assert_eq!(ini, "name = x\nnickname = \"\"\nretries = 3\n");

    let back: Settings = from_str(&ini).unwrap();
    assert_eq!(back, settings);

    let missing: Settings = from_str("name = y\nnickname =").unwrap();
    assert_eq!(missing.nickname, None);
    assert_eq!(missing.retries, None);
}

#[test]
fn test_enum_round_trip() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    enum Backend {
        Memory,
        Disk(String),
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Store {
        primary: Backend,
        fallback: Backend,
    }

    let store = Store {
        primary: Backend::Disk("/var/data".to_string()),
        fallback: Backend::Memory,
    };

    let ini = to_string(&store).unwrap();
    assert_eq!(ini, "fallback = Memory\n\n[primary]\nDisk = /var/data\n");

    let back: Store = from_str(&ini).unwrap();
    assert_eq!(back, store);
}

#[test]
fn test_unsupported_variants() {
    #[derive(Serialize)]
    enum Shape {
        Point(i32, i32),
    }

    #[derive(Serialize)]
    struct Holder {
        shape: Shape,
    }

    let result = to_string(&Holder {
        shape: Shape::Point(1, 2),
    });
    assert!(matches!(result, Err(Error::UnsupportedType(_))));
}

#[test]
fn test_to_string_requires_a_map() {
    assert!(matches!(to_string(&"text"), Err(Error::UnsupportedType(_))));
    assert!(matches!(to_string(&[1, 2]), Err(Error::UnsupportedType(_))));
}

#[test]
fn test_type_mismatch_is_reported() {
    #[derive(Deserialize, Debug)]
    struct Port {
        #[allow(dead_code)]
        port: u16,
    }

    let err = from_str::<Port>("port = [1, 2]").unwrap_err();
    assert!(err.to_string().contains("expected u16"));

    let err = from_str::<Vec<u16>>("a = 1").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}

#[test]
fn test_list_separator_option() {
    let user = User {
        id: 1,
        name: "a".to_string(),
        active: false,
        tags: vec!["x".to_string(), "y".to_string()],
    };

    let options = EncodeOptions::new().with_list_separator(ListSeparator::Comma);
    let ini = to_string_with_options(&user, options).unwrap();
    assert!(ini.contains("tags = [x,y]"));

    let back: User = from_str(&ini).unwrap();
    assert_eq!(back, user);
}

#[test]
fn test_writer_and_reader() {
    let user = User {
        id: 7,
        name: "Bob".to_string(),
        active: true,
        tags: vec![],
    };

    let mut buffer = Vec::new();
    to_writer(&mut buffer, &user).unwrap();
    assert_eq!(buffer, b"id = 7\nname = Bob\nactive = true\ntags = []\n");

    let back: User = from_reader(Cursor::new(&buffer)).unwrap();
    assert_eq!(back, user);

    let back: User = from_slice(&buffer).unwrap();
    assert_eq!(back, user);
}

#[test]
fn test_document_serializes_like_json() {
    let doc = decode("name = demo\ntags = [a, 1]\n\n[server]\nport = 8080").unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "demo",
            "tags": ["a", 1],
            "server": {"port": 8080}
        })
    );

    let back: Document = serde_json::from_value(json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_value_from_json() {
    let value: Value = serde_json::from_str(r#"{"a": null, "b": [1, 2.5], "c": true}"#).unwrap();
    assert_eq!(value.get("a"), Some(&Value::default()));
    assert_eq!(
        value.get("b"),
        Some(&Value::List(vec![Value::Integer(1), Value::Float(2.5)]))
    );
    assert_eq!(value.get("c"), Some(&Value::Bool(true)));
}

#[test]
fn test_to_value_and_from_value() {
    let mut map = BTreeMap::new();
    map.insert("b".to_string(), vec![1, 2]);
    map.insert("a".to_string(), vec![3]);

    let value = to_value(&map).unwrap();
    let keys: Vec<_> = value.as_map().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["a", "b"]);

    let back: BTreeMap<String, Vec<i32>> = from_value(value).unwrap();
    assert_eq!(back, map);
}

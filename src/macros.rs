/// Builds a [`Value`](crate::Value) from a literal, list or map expression.
///
/// Lists use `[...]` and maps `{"key": value, ...}`. Any other expression
/// goes through [`to_value`](crate::to_value); values that cannot be
/// converted become an empty string.
///
/// # Examples
///
/// ```rust
/// use serde_xini::{encode_value, ini};
///
/// let doc = ini!({
///     "name": "demo",
///     "tags": ["ab", 23],
///     "server": {
///         "host": "localhost",
///         "port": 8080
///     }
/// });
///
/// assert_eq!(
///     encode_value(&doc).unwrap(),
///     "name = demo\ntags = [ab, 23]\n\n[server]\nhost = localhost\nport = 8080\n"
/// );
/// ```
#[macro_export]
macro_rules! ini {
    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::ini!($elem)),*])
    };

    ({}) => {
        $crate::Value::Map($crate::IniMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::IniMap::new();
        $(
            map.insert($key.to_string(), $crate::ini!($value));
        )*
        $crate::Value::Map(map)
    }};

    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or_default()
    }};
}

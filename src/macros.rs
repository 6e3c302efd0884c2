#[macro_export]
macro_rules! snap {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::snap!($elem)),*])
    };

    // Handle empty tuple
    (()) => {
        $crate::Value::Tuple(vec![])
    };

    // Handle non-empty tuple
    (( $($elem:tt),+ $(,)? )) => {
        $crate::Value::Tuple(vec![$($crate::snap!($elem)),+])
    };

    // Handle empty mapping
    ({}) => {
        $crate::Value::Map($crate::SnapMap::new())
    };

    // Handle non-empty mapping
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::SnapMap::new();
        $(
            map.insert($crate::Key::from($key), $crate::snap!($value));
        )*
        $crate::Value::Map(map)
    }};

    // Fallback for any other expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}

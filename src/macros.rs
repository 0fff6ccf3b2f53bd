#[macro_export]
macro_rules! intent {
	($action:expr) => {
		$crate::types::Intent::from_action($action)
	};
}

/// Builds a [crate::types::Value::Dict] from `key => value` pairs
#[macro_export]
macro_rules! dict {
	() => {
		$crate::types::Value::Dict($crate::types::Dict::new())
	};
	($($key:expr => $value:expr),+ $(,)?) => {{
		let mut dict = $crate::types::Dict::new();
		$(
			dict.insert(String::from($key), $crate::types::Value::from($value));
		)+
		$crate::types::Value::Dict(dict)
	}};
}


use std::collections::hash_map::Keys;

use tracing::warn;

use crate::traits::Application;
use crate::types::{ComponentName, ExtraValue, Extras, Intent, LoadedClass, Uri};

impl Intent {
	pub fn new() -> Self {
		Intent::default()
	}

	pub fn from_action<S: Into<String>>(action: S) -> Self {
		Intent {
			action: Some(action.into()),
			..Default::default()
		}
	}

	pub fn set_action<S: Into<String>>(&mut self, action: S) -> &mut Self {
		self.action = Some(action.into());
		self
	}

	pub fn set_data(&mut self, data: Uri) -> &mut Self {
		self.data = Some(data);
		self
	}

	pub fn set_package<S: Into<String>>(&mut self, package: S) -> &mut Self {
		self.package = Some(package.into());
		self
	}

	/// Explicit component from a package and a fully qualified class name
	pub fn set_class_name<P: Into<String>, C: Into<String>>(&mut self, package: P, class_name: C) -> &mut Self {
		self.component = Some(ComponentName::new(package, class_name));
		self
	}

	/// Explicit component for a class loaded inside the given application
	pub fn set_class(&mut self, application: &dyn Application, class: &LoadedClass) -> &mut Self {
		self.set_class_name(application.package_name(), class.name())
	}

	pub fn set_type<S: Into<String>>(&mut self, mime_type: S) -> &mut Self {
		self.mime_type = Some(mime_type.into());
		self
	}

	pub fn set_flags(&mut self, flags: u32) -> &mut Self {
		self.flags = flags;
		self
	}

	pub fn add_flags(&mut self, flags: u32) -> &mut Self {
		self.flags |= flags;
		self
	}

	pub fn add_category<S: Into<String>>(&mut self, category: S) -> &mut Self {
		self.categories.insert(category.into());
		self
	}

	pub fn has_category(&self, category: &str) -> bool {
		self.categories.contains(category)
	}

	/// Stores an extra, replacing any previous value of any type under the same key
	pub fn put_extra<K: Into<String>, V: Into<ExtraValue>>(&mut self, key: K, value: V) -> &mut Self {
		self.extras.0.insert(key.into(), value.into());
		self
	}

	pub fn remove_extra(&mut self, name: &str) -> Option<ExtraValue> {
		self.extras.0.remove(name)
	}

	pub fn has_extra(&self, name: &str) -> bool {
		self.extras.0.contains_key(name)
	}

	pub fn get_string_extra(&self, name: &str) -> Option<&str> {
		self.extras.typed(name, "String", |value| match value {
			ExtraValue::String(s) => Some(s.as_str()),
			_ => None,
		})
	}

	pub fn get_boolean_extra(&self, name: &str, default_value: bool) -> bool {
		self.extras
			.typed(name, "Boolean", |value| match *value {
				ExtraValue::Boolean(b) => Some(b),
				_ => None,
			})
			.unwrap_or(default_value)
	}

	pub fn get_int_extra(&self, name: &str, default_value: i32) -> i32 {
		self.extras
			.typed(name, "Int", |value| match *value {
				ExtraValue::Int(i) => Some(i),
				_ => None,
			})
			.unwrap_or(default_value)
	}

	pub fn get_long_extra(&self, name: &str, default_value: i64) -> i64 {
		self.extras
			.typed(name, "Long", |value| match *value {
				ExtraValue::Long(l) => Some(l),
				_ => None,
			})
			.unwrap_or(default_value)
	}

	pub fn get_double_extra(&self, name: &str, default_value: f64) -> f64 {
		self.extras
			.typed(name, "Double", |value| match *value {
				ExtraValue::Double(d) => Some(d),
				_ => None,
			})
			.unwrap_or(default_value)
	}

	pub fn get_data_string(&self) -> Option<String> {
		self.data.as_ref().map(|uri| uri.to_string())
	}

	pub fn get_component(&self) -> Option<&ComponentName> {
		self.component.as_ref()
	}
}

impl Extras {
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn get(&self, name: &str) -> Option<&ExtraValue> {
		self.0.get(name)
	}

	pub fn keys(&self) -> Keys<'_, String, ExtraValue> {
		self.0.keys()
	}

	/// Looks up `name` and converts it with `f`. A value stored with a different
	/// type is logged and reported as missing.
	fn typed<'a, T, F>(&'a self, name: &str, expected: &'static str, f: F) -> Option<T>
	where
		F: Fn(&'a ExtraValue) -> Option<T>,
	{
		let value = self.0.get(name)?;
		let result = f(value);
		if result.is_none() {
			let actual: &'static str = value.into();
			warn!("Key {} expected {} but value was a {}. The default value was returned.", name, expected, actual);
		}
		result
	}
}

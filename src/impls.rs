use std::collections::HashSet;
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::error::Error;
use crate::result::Result;
use crate::traits::{Application, ClassLoader};
use crate::types::{
	AppContext, ClassRegistry, ComponentName, CreationOptions, Dict, ExtraValue, Intent, LoadedClass, Value,
};

// region Intent

impl Display for Intent {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let mut parts: Vec<String> = vec![];
		if let Some(action) = self.action.as_ref() {
			parts.push(format!("act={}", action));
		}
		if !self.categories.is_empty() {
			parts.push(format!("cat=[{}]", self.categories.iter().join(",")));
		}
		if let Some(data) = self.data.as_ref() {
			parts.push(format!("dat={}", data));
		}
		if let Some(mime_type) = self.mime_type.as_ref() {
			parts.push(format!("typ={}", mime_type));
		}
		if self.flags != 0 {
			parts.push(format!("flg={:#x}", self.flags));
		}
		if let Some(package) = self.package.as_ref() {
			parts.push(format!("pkg={}", package));
		}
		if let Some(component) = self.component.as_ref() {
			parts.push(format!("cmp={}", component.flatten_to_short_string()));
		}
		if !self.extras.is_empty() {
			parts.push(String::from("(has extras)"));
		}
		write!(f, "Intent {{ {} }}", parts.join(" "))
	}
}

// endregion Intent

// region ComponentName

impl ComponentName {
	pub fn new<P: Into<String>, C: Into<String>>(package: P, class_name: C) -> Self {
		ComponentName {
			package: package.into(),
			class_name: class_name.into(),
		}
	}

	/// `package/class`, with the class shortened to `.Name` when it lives in the package
	pub fn flatten_to_short_string(&self) -> String {
		match self
			.class_name
			.strip_prefix(self.package.as_str())
			.filter(|rest| rest.starts_with('.'))
		{
			Some(rest) => format!("{}/{}", self.package, rest),
			None => self.to_string(),
		}
	}
}

impl Display for ComponentName {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.package, self.class_name)
	}
}

// endregion ComponentName

// region ExtraValue

impl From<String> for ExtraValue {
	fn from(value: String) -> Self {
		ExtraValue::String(value)
	}
}

impl From<&str> for ExtraValue {
	fn from(value: &str) -> Self {
		ExtraValue::String(value.to_string())
	}
}

impl From<bool> for ExtraValue {
	fn from(value: bool) -> Self {
		ExtraValue::Boolean(value)
	}
}

impl From<f64> for ExtraValue {
	fn from(value: f64) -> Self {
		ExtraValue::Double(value)
	}
}

impl From<i32> for ExtraValue {
	fn from(value: i32) -> Self {
		ExtraValue::Int(value)
	}
}

impl From<i64> for ExtraValue {
	fn from(value: i64) -> Self {
		ExtraValue::Long(value)
	}
}

impl From<ExtraValue> for Value {
	fn from(value: ExtraValue) -> Self {
		match value {
			ExtraValue::String(s) => Value::String(s),
			ExtraValue::Boolean(b) => Value::Bool(b),
			ExtraValue::Double(d) => Value::Double(d),
			ExtraValue::Int(i) => Value::Int(i),
			ExtraValue::Long(l) => Value::Long(l),
		}
	}
}

// endregion ExtraValue

// region Value

impl Value {
	pub fn type_name(&self) -> &'static str {
		self.into()
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// String form of the value, `None` for [Value::Null]
	pub fn as_string(&self) -> Option<String> {
		match self {
			Value::Null => None,
			Value::String(s) => Some(s.clone()),
			other => Some(other.to_string()),
		}
	}

	/// Integral numbers only, doubles with a fractional part are rejected
	pub fn as_i64(&self) -> Option<i64> {
		match *self {
			Value::Int(i) => Some(i as i64),
			Value::Long(l) => Some(l),
			Value::Double(d) if d.fract() == 0.0 && d >= i64::MIN as f64 && d <= i64::MAX as f64 => Some(d as i64),
			_ => None,
		}
	}

	pub fn as_i32(&self) -> Option<i32> {
		self.as_i64().and_then(|v| i32::try_from(v).ok())
	}

	pub fn as_f64(&self) -> Option<f64> {
		match *self {
			Value::Int(i) => Some(i as f64),
			Value::Long(l) => Some(l as f64),
			Value::Double(d) => Some(d),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match *self {
			Value::Bool(b) => Some(b),
			_ => None,
		}
	}

	pub fn as_dict(&self) -> Option<&Dict> {
		match self {
			Value::Dict(dict) => Some(dict),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => write!(f, "null"),
			Value::Bool(b) => write!(f, "{}", b),
			Value::Int(i) => write!(f, "{}", i),
			Value::Long(l) => write!(f, "{}", l),
			Value::Double(d) => write!(f, "{}", d),
			Value::String(s) => write!(f, "{}", s),
			Value::Array(values) => write!(f, "{}", values.iter().join(",")),
			Value::Dict(dict) => write!(f, "{{{}}}", dict.iter().map(|(k, v)| format!("{}={}", k, v)).join(", ")),
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Long(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Double(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Value::Array(value)
	}
}

impl From<Dict> for Value {
	fn from(value: Dict) -> Self {
		Value::Dict(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(v) => v.into(),
			None => Value::Null,
		}
	}
}

// endregion Value

// region CreationOptions

impl CreationOptions {
	pub fn from_action<S: Into<String>>(action: S) -> Self {
		CreationOptions {
			action: Some(action.into()),
			..Default::default()
		}
	}

	pub fn from_url<S: Into<String>>(url: S) -> Self {
		CreationOptions {
			url: Some(url.into()),
			..Default::default()
		}
	}
}

impl From<&Dict> for CreationOptions {
	fn from(dict: &Dict) -> Self {
		let string = |key: &str| dict.get(key).and_then(Value::as_string);
		CreationOptions {
			action: string("action"),
			url: string("url"),
			data: string("data"),
			class_name: string("className"),
			package_name: string("packageName"),
			mime_type: string("type"),
			flags: dict.get("flags").and_then(Value::as_i64).and_then(|v| u32::try_from(v).ok()),
		}
	}
}

impl TryFrom<&Value> for CreationOptions {
	type Error = Error;

	fn try_from(value: &Value) -> Result<Self> {
		match value {
			Value::Dict(dict) => Ok(dict.into()),
			other => Err(Error::InvalidArgument {
				method: "createIntent",
				index: 0,
				expected: "Dict",
				actual: other.type_name(),
			}),
		}
	}
}

// endregion CreationOptions

// region AppContext

impl AppContext {
	pub fn new<S: Into<String>>(package_name: S) -> Self {
		AppContext {
			package_name: package_name.into(),
		}
	}
}

impl Application for AppContext {
	fn package_name(&self) -> &str {
		self.package_name.as_str()
	}
}

// endregion AppContext

// region ClassRegistry

impl LoadedClass {
	pub fn name(&self) -> &str {
		self.0.as_str()
	}
}

impl Display for LoadedClass {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl ClassRegistry {
	pub fn new<I, S>(classes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		ClassRegistry {
			classes: classes.into_iter().map(Into::into).collect::<HashSet<_>>(),
		}
	}

	pub fn register<S: Into<String>>(&mut self, name: S) -> bool {
		self.classes.insert(name.into())
	}

	pub fn with_class<S: Into<String>>(mut self, name: S) -> Self {
		self.register(name);
		self
	}
}

impl ClassLoader for ClassRegistry {
	fn load_class(&self, name: &str) -> Result<LoadedClass> {
		if self.classes.contains(name) {
			Ok(LoadedClass(name.to_string()))
		} else {
			Err(Error::ClassNotFound(name.to_string()))
		}
	}
}

// endregion ClassRegistry

//! Name based method table exposed to the scripting layer.
//!
//! Every exposed operation is registered once with its arity and a handler
//! that converts the dynamic arguments, calls into [IntentProxy] and converts
//! the result back into a [Value].

use std::collections::HashMap;

use itertools::Itertools;
use once_cell::sync::Lazy;
use tracing::trace;

use crate::error::Error;
use crate::result::Result;
use crate::traits::{Application, ClassLoader};
use crate::types::{CreationOptions, IntentProxy, Value};

pub type Handler = fn(&mut IntentProxy, &[Value]) -> Result<Value>;

#[derive(Clone, Copy)]
pub struct Method {
	pub name: &'static str,
	pub arity: usize,
	handler: Handler,
}

struct MethodTable {
	methods: HashMap<&'static str, Method>,
	properties: HashMap<&'static str, &'static str>,
}

impl MethodTable {
	fn new() -> Self {
		MethodTable {
			methods: HashMap::new(),
			properties: HashMap::new(),
		}
	}

	fn method(mut self, name: &'static str, arity: usize, handler: Handler) -> Self {
		self.methods.insert(name, Method { name, arity, handler });
		self
	}

	/// Exposes a read-only property backed by a zero argument method
	fn property(mut self, name: &'static str, getter: &'static str) -> Self {
		self.properties.insert(name, getter);
		self
	}
}

static METHODS: Lazy<MethodTable> = Lazy::new(|| {
	MethodTable::new()
		.method("putExtra", 2, |proxy, args| {
			let key = string_arg("putExtra", args, 0)?;
			proxy.put_extra(key, args[1].clone())?;
			Ok(Value::Null)
		})
		.method("addCategory", 1, |proxy, args| {
			let category = optional_string_arg("addCategory", args, 0)?;
			proxy.add_category(category)?;
			Ok(Value::Null)
		})
		.method("getStringExtra", 1, |proxy, args| {
			let name = string_arg("getStringExtra", args, 0)?;
			Ok(proxy.get_string_extra(name)?.into())
		})
		.method("getBooleanExtra", 2, |proxy, args| {
			let name = string_arg("getBooleanExtra", args, 0)?;
			let default_value = bool_arg("getBooleanExtra", args, 1)?;
			Ok(proxy.get_boolean_extra(name, default_value)?.into())
		})
		.method("getIntExtra", 2, |proxy, args| {
			let name = string_arg("getIntExtra", args, 0)?;
			let default_value = int_arg("getIntExtra", args, 1)?;
			Ok(proxy.get_int_extra(name, default_value)?.into())
		})
		.method("getLongExtra", 2, |proxy, args| {
			let name = string_arg("getLongExtra", args, 0)?;
			let default_value = long_arg("getLongExtra", args, 1)?;
			Ok(proxy.get_long_extra(name, default_value)?.into())
		})
		.method("getDoubleExtra", 2, |proxy, args| {
			let name = string_arg("getDoubleExtra", args, 0)?;
			let default_value = double_arg("getDoubleExtra", args, 1)?;
			Ok(proxy.get_double_extra(name, default_value)?.into())
		})
		.method("hasExtra", 1, |proxy, args| {
			let name = string_arg("hasExtra", args, 0)?;
			Ok(proxy.has_extra(name).into())
		})
		.method("removeExtra", 1, |proxy, args| {
			let name = string_arg("removeExtra", args, 0)?;
			Ok(proxy.remove_extra(name)?.into())
		})
		.method("hasCategory", 1, |proxy, args| {
			let category = string_arg("hasCategory", args, 0)?;
			Ok(proxy.has_category(category)?.into())
		})
		.method("getData", 0, |proxy, _| Ok(proxy.get_data()?.into()))
		.method("getAction", 0, |proxy, _| Ok(proxy.get_action()?.into()))
		.method("getType", 0, |proxy, _| Ok(proxy.get_type()?.into()))
		.method("getPackageName", 0, |proxy, _| Ok(proxy.get_package_name()?.into()))
		.method("getClassName", 0, |proxy, _| Ok(proxy.get_class_name()?.into()))
		.method("getFlags", 0, |proxy, _| Ok(Value::Long(proxy.get_flags()? as i64)))
		.method("setFlags", 1, |proxy, args| {
			proxy.set_flags(flags_arg("setFlags", args, 0)?)?;
			Ok(Value::Null)
		})
		.method("addFlags", 1, |proxy, args| {
			proxy.add_flags(flags_arg("addFlags", args, 0)?)?;
			Ok(Value::Null)
		})
		.property("data", "getData")
		.property("action", "getAction")
		.property("type", "getType")
		.property("packageName", "getPackageName")
		.property("className", "getClassName")
		.property("flags", "getFlags")
});

/// Creates a proxy from a creation dictionary
pub fn create(
	dict: &Value,
	for_service: bool,
	application: &dyn Application,
	loader: &dyn ClassLoader,
) -> Result<IntentProxy> {
	let options = CreationOptions::try_from(dict)?;
	let mut proxy = IntentProxy::new().with_for_service(for_service);
	proxy.apply_creation_options(&options, application, loader)?;
	Ok(proxy)
}

/// Calls the exposed method `name` on `proxy`
pub fn invoke(proxy: &mut IntentProxy, name: &str, args: &[Value]) -> Result<Value> {
	let method = lookup(name)?;
	if args.len() != method.arity {
		return Err(Error::InvalidArgumentCount {
			method: method.name,
			expected: method.arity,
			actual: args.len(),
		});
	}
	trace!("invoke {}({})", method.name, args.iter().join(", "));
	(method.handler)(proxy, args)
}

/// Reads the exposed property `name`
pub fn get_property(proxy: &mut IntentProxy, name: &str) -> Result<Value> {
	match METHODS.properties.get(name) {
		Some(getter) => invoke(proxy, getter, &[]),
		None => Err(Error::UnknownMethod(name.to_string())),
	}
}

pub fn lookup(name: &str) -> Result<Method> {
	METHODS
		.methods
		.get(name)
		.copied()
		.ok_or_else(|| Error::UnknownMethod(name.to_string()))
}

/// Names of all exposed methods, sorted
pub fn method_names() -> Vec<&'static str> {
	METHODS.methods.keys().copied().sorted().collect()
}

pub fn property_names() -> Vec<&'static str> {
	METHODS.properties.keys().copied().sorted().collect()
}

fn invalid(method: &'static str, index: usize, expected: &'static str, value: &Value) -> Error {
	Error::InvalidArgument {
		method,
		index,
		expected,
		actual: value.type_name(),
	}
}

fn string_arg<'a>(method: &'static str, args: &'a [Value], index: usize) -> Result<&'a str> {
	match &args[index] {
		Value::String(s) => Ok(s.as_str()),
		other => Err(invalid(method, index, "String", other)),
	}
}

fn optional_string_arg<'a>(method: &'static str, args: &'a [Value], index: usize) -> Result<Option<&'a str>> {
	match &args[index] {
		Value::Null => Ok(None),
		Value::String(s) => Ok(Some(s.as_str())),
		other => Err(invalid(method, index, "String", other)),
	}
}

fn bool_arg(method: &'static str, args: &[Value], index: usize) -> Result<bool> {
	args[index].as_bool().ok_or_else(|| invalid(method, index, "Bool", &args[index]))
}

fn int_arg(method: &'static str, args: &[Value], index: usize) -> Result<i32> {
	args[index].as_i32().ok_or_else(|| invalid(method, index, "Int", &args[index]))
}

fn long_arg(method: &'static str, args: &[Value], index: usize) -> Result<i64> {
	args[index].as_i64().ok_or_else(|| invalid(method, index, "Long", &args[index]))
}

fn double_arg(method: &'static str, args: &[Value], index: usize) -> Result<f64> {
	args[index].as_f64().ok_or_else(|| invalid(method, index, "Double", &args[index]))
}

fn flags_arg(method: &'static str, args: &[Value], index: usize) -> Result<u32> {
	args[index]
		.as_i64()
		.and_then(|v| u32::try_from(v).ok())
		.ok_or_else(|| invalid(method, index, "Int", &args[index]))
}

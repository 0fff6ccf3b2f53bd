use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// Action used to share content, when no explicit type is given the intent
/// defaults to `text/plain`
pub const ACTION_SEND: &str = "android.intent.action.SEND";

pub const DEFAULT_SEND_TYPE: &str = "text/plain";

/// Native action descriptor
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Intent {
	pub action: Option<String>,
	pub data: Option<Uri>,
	pub mime_type: Option<String>,
	pub categories: BTreeSet<String>,
	pub component: Option<ComponentName>,
	pub package: Option<String>,
	pub flags: u32,
	pub extras: Extras,
}

#[derive(Debug, Default, Clone, PartialEq)]
#[repr(transparent)]
pub struct Extras(pub(crate) HashMap<String, ExtraValue>);

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum ExtraValue {
	String(String),
	Boolean(bool),
	Double(f64),
	Int(i32),
	Long(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName {
	pub package: String,
	pub class_name: String,
}

/// Lenient uri, parsing never fails
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
	pub(crate) raw: String,
	pub(crate) scheme: Option<String>,
	pub(crate) scheme_specific_part: String,
	pub(crate) fragment: Option<String>,
}

/// Which native component variant a symbolic url resolves to
#[derive(Debug, Display, IntoStaticStr, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ComponentKind {
	#[default]
	Activity,
	Service,
}

/// Dynamic value exchanged with the scripting layer
#[derive(Debug, Clone, PartialEq, IntoStaticStr, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Int(i32),
	Long(i64),
	Double(f64),
	String(String),
	Array(Vec<Value>),
	Dict(Dict),
}

pub type Dict = BTreeMap<String, Value>;

/// Options read from the creation dictionary of an intent proxy
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreationOptions {
	pub action: Option<String>,
	pub url: Option<String>,
	pub data: Option<String>,
	pub class_name: Option<String>,
	pub package_name: Option<String>,
	#[serde(rename = "type")]
	pub mime_type: Option<String>,
	pub flags: Option<u32>,
}

/// A class the [crate::traits::ClassLoader] was able to resolve
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct LoadedClass(pub(crate) String);

/// Host application, supplies the package name used for url resolution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppContext {
	pub package_name: String,
}

/// Class loader backed by a set of registered class names
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassRegistry {
	pub(crate) classes: HashSet<String>,
}

/// Scripting bridge object wrapping a native [Intent]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntentProxy {
	pub(crate) intent: Option<Intent>,
	pub(crate) for_service: bool,
}

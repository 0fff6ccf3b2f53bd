use tracing::{debug, error, trace, warn};

use crate::class_name::resolve_class_name;
use crate::error::Error;
use crate::result::Result;
use crate::traits::{Application, ClassLoader};
use crate::types::{ComponentKind, CreationOptions, ExtraValue, Intent, IntentProxy, Uri, Value, ACTION_SEND, DEFAULT_SEND_TYPE};

impl IntentProxy {
	/// An empty proxy, creation options still need to be applied
	pub fn new() -> Self {
		IntentProxy::default()
	}

	/// Wraps an existing native intent
	pub fn from_intent(intent: Intent) -> Self {
		IntentProxy {
			intent: Some(intent),
			for_service: false,
		}
	}

	/// Urls resolve to a service class instead of an activity
	pub fn with_for_service(mut self, for_service: bool) -> Self {
		self.for_service = for_service;
		self
	}

	pub fn set_for_service(&mut self, value: bool) {
		self.for_service = value;
	}

	pub fn is_for_service(&self) -> bool {
		self.for_service
	}

	fn component_kind(&self) -> ComponentKind {
		if self.for_service {
			ComponentKind::Service
		} else {
			ComponentKind::Activity
		}
	}

	/// Replaces the wrapped intent with a new one built from `options`.
	///
	/// A `url` takes precedence over explicit `className`/`packageName`: both are
	/// reassigned to the application package and the class resolved from the url.
	/// A `className` without a `packageName` must be known to `loader`.
	pub fn apply_creation_options(
		&mut self,
		options: &CreationOptions,
		application: &dyn Application,
		loader: &dyn ClassLoader,
	) -> Result<()> {
		let kind = self.component_kind();
		let intent = self.intent.insert(Intent::new());

		let mut class_name = options.class_name.clone();
		let mut package_name = options.package_name.clone();

		if let Some(action) = options.action.as_ref() {
			debug!("Setting action: {}", action);
			intent.set_action(action.as_str());
		}

		if let Some(data) = options.data.as_ref() {
			debug!("Setting data uri: {}", data);
			intent.set_data(Uri::parse(data.as_str()));
		}

		if let Some(package) = package_name.as_ref() {
			debug!("Setting package: {}", package);
			intent.set_package(package.as_str());
		}

		if let Some(url) = options.url.as_ref() {
			debug!("Creating intent for JS {} @ {}", kind, url);
			match resolve_class_name(url, kind) {
				Some(resolved) => {
					let package = application.package_name();
					if class_name.is_some() || package_name.is_some() {
						debug!("url overrides explicit className/packageName");
					}
					class_name = Some(format!("{}.{}", package, resolved));
					package_name = Some(package.to_string());
				}
				None => warn!("url {:?} does not resolve to a class name, ignoring", url),
			}
		}

		if let Some(class_name) = class_name.as_ref() {
			match package_name.as_ref() {
				Some(package) => {
					debug!("Both className and packageName set, using setClassName({}, {})", package, class_name);
					intent.set_class_name(package.as_str(), class_name.as_str());
				}
				None => match loader.load_class(class_name) {
					Ok(class) => {
						intent.set_class(application, &class);
					}
					Err(err) => {
						error!("Unable to locate class for name: {}", class_name);
						return Err(err);
					}
				},
			}
		}

		match options.mime_type.as_ref() {
			Some(mime_type) => {
				debug!("Setting type: {}", mime_type);
				intent.set_type(mime_type.as_str());
			}
			None => {
				if options.action.as_deref() == Some(ACTION_SEND) {
					debug!("Intent type not set, defaulting to {} because action is a SEND action", DEFAULT_SEND_TYPE);
					intent.set_type(DEFAULT_SEND_TYPE);
				}
			}
		}

		if let Some(flags) = options.flags {
			debug!("Setting flags: {:#x}", flags);
			intent.set_flags(flags);
		}

		trace!("created {}", intent);
		Ok(())
	}

	pub fn get_intent(&self) -> Option<&Intent> {
		self.intent.as_ref()
	}

	pub fn into_intent(self) -> Option<Intent> {
		self.intent
	}

	fn intent(&self) -> Result<&Intent> {
		self.intent.as_ref().ok_or(Error::IntentNotInitialized)
	}

	fn intent_mut(&mut self) -> Result<&mut Intent> {
		self.intent.as_mut().ok_or(Error::IntentNotInitialized)
	}

	/// Strings, booleans and numbers map to the matching typed extra, anything
	/// else is stored in its string form.
	pub fn put_extra<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Result<()> {
		let extra = match value.into() {
			Value::String(s) => ExtraValue::String(s),
			Value::Bool(b) => ExtraValue::Boolean(b),
			Value::Double(d) => ExtraValue::Double(d),
			Value::Int(i) => ExtraValue::Int(i),
			Value::Long(l) => ExtraValue::Long(l),
			other => {
				warn!("Warning unimplemented put conversion for {} trying String", other.type_name());
				ExtraValue::String(other.to_string())
			}
		};
		self.intent_mut()?.put_extra(key, extra);
		Ok(())
	}

	/// Empty or missing categories are ignored, even before an intent exists
	pub fn add_category(&mut self, category: Option<&str>) -> Result<()> {
		match category {
			Some(category) if !category.is_empty() => {
				debug!("Adding category: {}", category);
				self.intent_mut()?.add_category(category);
			}
			_ => {}
		}
		Ok(())
	}

	pub fn has_category(&self, category: &str) -> Result<bool> {
		Ok(self.intent()?.has_category(category))
	}

	pub fn get_string_extra(&self, name: &str) -> Result<Option<String>> {
		Ok(self.intent()?.get_string_extra(name).map(str::to_string))
	}

	pub fn get_boolean_extra(&self, name: &str, default_value: bool) -> Result<bool> {
		Ok(self.intent()?.get_boolean_extra(name, default_value))
	}

	pub fn get_int_extra(&self, name: &str, default_value: i32) -> Result<i32> {
		Ok(self.intent()?.get_int_extra(name, default_value))
	}

	pub fn get_long_extra(&self, name: &str, default_value: i64) -> Result<i64> {
		Ok(self.intent()?.get_long_extra(name, default_value))
	}

	pub fn get_double_extra(&self, name: &str, default_value: f64) -> Result<f64> {
		Ok(self.intent()?.get_double_extra(name, default_value))
	}

	pub fn remove_extra(&mut self, name: &str) -> Result<bool> {
		Ok(self.intent_mut()?.remove_extra(name).is_some())
	}

	/// `false` when no intent has been created yet
	pub fn has_extra(&self, name: &str) -> bool {
		match self.intent.as_ref() {
			Some(intent) => intent.has_extra(name),
			None => false,
		}
	}

	pub fn get_data(&self) -> Result<Option<String>> {
		Ok(self.intent()?.get_data_string())
	}

	pub fn get_action(&self) -> Result<Option<&str>> {
		Ok(self.intent()?.action.as_deref())
	}

	pub fn get_type(&self) -> Result<Option<&str>> {
		Ok(self.intent()?.mime_type.as_deref())
	}

	/// Package of the explicit component, or the package restriction if there is none
	pub fn get_package_name(&self) -> Result<Option<&str>> {
		let intent = self.intent()?;
		Ok(intent
			.component
			.as_ref()
			.map(|c| c.package.as_str())
			.or(intent.package.as_deref()))
	}

	pub fn get_class_name(&self) -> Result<Option<&str>> {
		Ok(self.intent()?.component.as_ref().map(|c| c.class_name.as_str()))
	}

	pub fn get_flags(&self) -> Result<u32> {
		Ok(self.intent()?.flags)
	}

	pub fn set_flags(&mut self, flags: u32) -> Result<()> {
		self.intent_mut()?.set_flags(flags);
		Ok(())
	}

	pub fn add_flags(&mut self, flags: u32) -> Result<()> {
		self.intent_mut()?.add_flags(flags);
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use crate::error::Error;
	use crate::test::test::{app, init_log, loader, PACKAGE_NAME};
	use crate::types::{CreationOptions, ExtraValue, Intent, IntentProxy, Value, ACTION_SEND};

	fn proxy_from(options: &CreationOptions) -> IntentProxy {
		let mut proxy = IntentProxy::new();
		proxy
			.apply_creation_options(options, &app(), &loader())
			.expect("failed to apply creation options");
		proxy
	}

	#[test]
	fn test_send_defaults_to_text_plain() {
		init_log();
		let proxy = proxy_from(&CreationOptions::from_action(ACTION_SEND));
		assert_eq!(Some("text/plain"), proxy.get_type().unwrap());
		assert_eq!(Some(ACTION_SEND), proxy.get_action().unwrap());
	}

	#[test]
	fn test_explicit_type_wins_over_send_default() {
		let proxy = proxy_from(&CreationOptions {
			action: Some(ACTION_SEND.to_string()),
			mime_type: Some("image/jpeg".to_string()),
			..Default::default()
		});
		assert_eq!(Some("image/jpeg"), proxy.get_type().unwrap());
	}

	#[test]
	fn test_other_action_leaves_type_unset() {
		let proxy = proxy_from(&CreationOptions::from_action("android.intent.action.VIEW"));
		assert_eq!(None, proxy.get_type().unwrap());
	}

	#[test]
	fn test_url_resolves_activity() {
		init_log();
		let proxy = proxy_from(&CreationOptions::from_url("app://windows/main.js"));
		assert_eq!(Some(PACKAGE_NAME), proxy.get_package_name().unwrap());
		assert_eq!(
			Some(format!("{}.Windows_mainActivity", PACKAGE_NAME).as_str()),
			proxy.get_class_name().unwrap()
		);
	}

	#[test]
	fn test_url_resolves_service() {
		let mut proxy = IntentProxy::new().with_for_service(true);
		proxy
			.apply_creation_options(&CreationOptions::from_url("bg.js"), &app(), &loader())
			.unwrap();
		assert!(proxy.is_for_service());
		assert_eq!(Some(format!("{}.BgService", PACKAGE_NAME).as_str()), proxy.get_class_name().unwrap());
	}

	#[test]
	fn test_url_overrides_explicit_class_and_package() {
		let proxy = proxy_from(&CreationOptions {
			url: Some("main.js".to_string()),
			class_name: Some("org.other.Explicit".to_string()),
			package_name: Some("org.other".to_string()),
			..Default::default()
		});
		let intent = proxy.get_intent().expect("intent expected");
		let component = intent.get_component().expect("component expected");
		assert_eq!(PACKAGE_NAME, component.package);
		assert_eq!(format!("{}.MainActivity", PACKAGE_NAME), component.class_name);
		// the package restriction was applied before the url was resolved
		assert_eq!(Some("org.other"), intent.package.as_deref());
	}

	#[test]
	fn test_empty_url_is_ignored() {
		let proxy = proxy_from(&CreationOptions {
			url: Some(String::new()),
			..Default::default()
		});
		assert_eq!(None, proxy.get_class_name().unwrap());
	}

	#[test]
	fn test_class_and_package() {
		let proxy = proxy_from(&CreationOptions {
			class_name: Some("com.android.settings.Settings".to_string()),
			package_name: Some("com.android.settings".to_string()),
			..Default::default()
		});
		assert_eq!(Some("com.android.settings"), proxy.get_package_name().unwrap());
		assert_eq!(Some("com.android.settings.Settings"), proxy.get_class_name().unwrap());
	}

	#[test]
	fn test_class_without_package_uses_loader() {
		let proxy = proxy_from(&CreationOptions {
			class_name: Some(crate::test::test::KNOWN_CLASS.to_string()),
			..Default::default()
		});
		assert_eq!(Some(PACKAGE_NAME), proxy.get_package_name().unwrap());
		assert_eq!(Some(crate::test::test::KNOWN_CLASS), proxy.get_class_name().unwrap());
	}

	#[test]
	fn test_missing_class_fails() {
		init_log();
		let mut proxy = IntentProxy::new();
		let result = proxy.apply_creation_options(
			&CreationOptions {
				class_name: Some("com.example.Missing".to_string()),
				..Default::default()
			},
			&app(),
			&loader(),
		);
		let err = result.expect_err("class lookup should fail");
		assert_eq!(Error::ClassNotFound("com.example.Missing".to_string()), err);
		assert_eq!("Missing class for name: com.example.Missing", err.to_string());
	}

	#[test]
	fn test_data_and_flags() {
		let proxy = proxy_from(&CreationOptions {
			action: Some("android.intent.action.VIEW".to_string()),
			data: Some("http://www.google.com".to_string()),
			flags: Some(0x10000000),
			..Default::default()
		});
		assert_eq!(Some(String::from("http://www.google.com")), proxy.get_data().unwrap());
		assert_eq!(0x10000000, proxy.get_flags().unwrap());
	}

	#[test]
	fn test_apply_discards_previous_state() {
		let mut proxy = proxy_from(&CreationOptions::from_action("a"));
		proxy.put_extra("k", "v").unwrap();
		proxy
			.apply_creation_options(&CreationOptions::from_action("b"), &app(), &loader())
			.unwrap();
		assert!(!proxy.has_extra("k"));
		assert_eq!(Some("b"), proxy.get_action().unwrap());
	}

	#[test]
	fn test_failed_apply_discards_previous_state() {
		let mut proxy = proxy_from(&CreationOptions::from_action("a"));
		proxy.put_extra("stale", "v").unwrap();

		let result = proxy.apply_creation_options(
			&CreationOptions {
				action: Some("b".to_string()),
				class_name: Some("com.example.Missing".to_string()),
				..Default::default()
			},
			&app(),
			&loader(),
		);
		assert_eq!(Err(Error::ClassNotFound("com.example.Missing".to_string())), result);
		assert!(!proxy.has_extra("stale"));
		assert_eq!(Some("b"), proxy.get_action().unwrap());
		assert_eq!(None, proxy.get_class_name().unwrap());
	}

	#[test]
	fn test_put_extra_double() {
		let mut proxy = proxy_from(&CreationOptions::default());
		proxy.put_extra("k", 3.14).unwrap();
		assert_eq!(3.14, proxy.get_double_extra("k", 0.0).unwrap());
		assert_eq!(9.9, proxy.get_double_extra("missing", 9.9).unwrap());
	}

	#[test]
	fn test_put_extra_typed() {
		let mut proxy = proxy_from(&CreationOptions::default());
		proxy.put_extra("s", "text").unwrap();
		proxy.put_extra("b", true).unwrap();
		proxy.put_extra("i", 7).unwrap();
		proxy.put_extra("l", 1i64 << 40).unwrap();

		assert_eq!(Some(String::from("text")), proxy.get_string_extra("s").unwrap());
		assert_eq!(None, proxy.get_string_extra("missing").unwrap());
		assert!(proxy.get_boolean_extra("b", false).unwrap());
		assert_eq!(7, proxy.get_int_extra("i", 0).unwrap());
		assert_eq!(1i64 << 40, proxy.get_long_extra("l", 0).unwrap());
		assert_eq!(-1, proxy.get_int_extra("missing", -1).unwrap());
	}

	#[test]
	fn test_put_extra_fallback_to_string() {
		init_log();
		let mut proxy = proxy_from(&CreationOptions::default());
		proxy
			.put_extra("list", Value::Array(vec![Value::Int(1), Value::Int(2)]))
			.unwrap();
		let intent = proxy.get_intent().unwrap();
		assert_eq!(Some(&ExtraValue::String(String::from("1,2"))), intent.extras.get("list"));
	}

	#[test]
	fn test_add_category() {
		let mut proxy = proxy_from(&CreationOptions::default());
		proxy.add_category(None).unwrap();
		proxy.add_category(Some("")).unwrap();
		proxy.add_category(Some("android.intent.category.DEFAULT")).unwrap();
		let intent = proxy.get_intent().unwrap();
		assert_eq!(1, intent.categories.len());
		assert!(proxy.has_category("android.intent.category.DEFAULT").unwrap());
	}

	#[test]
	fn test_uninitialized() {
		let mut proxy = IntentProxy::new();
		assert!(!proxy.has_extra("k"));
		assert_eq!(Err(Error::IntentNotInitialized), proxy.put_extra("k", 1));
		assert_eq!(Err(Error::IntentNotInitialized), proxy.get_data());
		assert_eq!(Err(Error::IntentNotInitialized), proxy.get_int_extra("k", 0));

		assert_eq!(Ok(()), proxy.add_category(None));
		assert_eq!(Ok(()), proxy.add_category(Some("")));
		assert_eq!(Err(Error::IntentNotInitialized), proxy.add_category(Some("android.intent.category.DEFAULT")));
		assert!(proxy.get_intent().is_none());
	}

	#[test]
	fn test_from_intent() {
		let mut intent = Intent::from_action("android.intent.action.VIEW");
		intent.put_extra("k", "v");
		let mut proxy = IntentProxy::from_intent(intent);
		proxy.set_flags(0x2).unwrap();
		proxy.add_flags(0x1).unwrap();
		assert!(proxy.has_extra("k"));
		assert!(proxy.remove_extra("k").unwrap());
		assert!(!proxy.has_extra("k"));

		let intent = proxy.into_intent().expect("intent expected");
		assert_eq!(0x3, intent.flags);
	}
}

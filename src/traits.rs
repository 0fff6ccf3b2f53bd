use crate::result::Result;
use crate::types::LoadedClass;

/// Host application the proxy is running in
pub trait Application {
	fn package_name(&self) -> &str;
}

/// Resolves class names to loadable classes
pub trait ClassLoader {
	/// Fails with [crate::error::Error::ClassNotFound] if no class exists for `name`
	fn load_class(&self, name: &str) -> Result<LoadedClass>;
}

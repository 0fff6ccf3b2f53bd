pub use crate::error::Error;
pub use crate::result::Result;
pub use crate::traits::{Application, ClassLoader};
pub use crate::types::{
	AppContext, ClassRegistry, ComponentKind, ComponentName, CreationOptions, Dict, ExtraValue, Extras, Intent,
	IntentProxy, LoadedClass, Uri, Value, ACTION_SEND,
};

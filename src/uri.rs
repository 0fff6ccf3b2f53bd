use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Uri;

impl Uri {
	/// Parses the given string. Malformed input is kept verbatim as an opaque,
	/// scheme-less uri.
	pub fn parse<S: Into<String>>(input: S) -> Uri {
		lazy_static! {
			static ref RE: Regex = Regex::new(r"^(?:(?P<scheme>[A-Za-z][A-Za-z0-9+.\-]*):)?(?P<ssp>[^#]*)(?:#(?P<fragment>.*))?$").unwrap();
		}

		let raw = input.into();
		let (scheme, scheme_specific_part, fragment) = match RE.captures(&raw) {
			Some(cap) => (
				cap.name("scheme").map(|m| m.as_str().to_string()),
				cap.name("ssp").map(|m| m.as_str().to_string()).unwrap_or_default(),
				cap.name("fragment").map(|m| m.as_str().to_string()),
			),
			None => (None, raw.clone(), None),
		};

		Uri {
			raw,
			scheme,
			scheme_specific_part,
			fragment,
		}
	}

	pub fn scheme(&self) -> Option<&str> {
		self.scheme.as_deref()
	}

	pub fn scheme_specific_part(&self) -> &str {
		self.scheme_specific_part.as_str()
	}

	pub fn fragment(&self) -> Option<&str> {
		self.fragment.as_deref()
	}

	pub fn is_hierarchical(&self) -> bool {
		self.scheme.is_none() || self.scheme_specific_part.starts_with('/')
	}

	pub fn as_str(&self) -> &str {
		self.raw.as_str()
	}
}

impl Display for Uri {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.raw)
	}
}

impl FromStr for Uri {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Uri::parse(s))
	}
}

impl From<&str> for Uri {
	fn from(value: &str) -> Self {
		Uri::parse(value)
	}
}

use itertools::Itertools;

use crate::types::ComponentKind;

const APP_SCHEME: &str = "app:";
const JS_EXTENSION: &str = ".js";

static ESCAPE_CHARS: [char; 7] = ['\\', '/', ' ', '.', '$', '&', '@'];

/// Resolves a symbolic script url into the name of the generated native class.
///
/// The url is split on `/` and, for `app:` urls, the scheme and app id segments
/// are skipped. The remaining segments are joined with `_`, a trailing `.js` is
/// dropped, the first letter is uppercased, unsafe characters become `_` and
/// the component kind is appended:
///
/// ```
/// use ti_intent::class_name::resolve_class_name;
/// use ti_intent::types::ComponentKind;
///
/// assert_eq!(Some("Windows_mainActivity".to_string()), resolve_class_name("app://windows/main.js", ComponentKind::Activity));
/// assert_eq!(Some("A_b_c_dService".to_string()), resolve_class_name("a.b/c d", ComponentKind::Service));
/// assert_eq!(None, resolve_class_name("", ComponentKind::Activity));
/// ```
///
/// Returns `None` when the url has no segments at all.
pub fn resolve_class_name(url: &str, kind: ComponentKind) -> Option<String> {
	let mut parts: Vec<&str> = url.split('/').collect();
	while parts.last().is_some_and(|part| part.is_empty()) {
		parts.pop();
	}

	if parts.is_empty() {
		return None;
	}

	let start = if parts[0] == APP_SCHEME && parts.len() >= 3 { 2 } else { 0 };

	let joined = parts[start..].iter().join("_");
	let stripped = joined.strip_suffix(JS_EXTENSION).unwrap_or(joined.as_str());

	let capitalized = capitalize(stripped);
	let escaped: String = capitalized
		.chars()
		.map(|c| if ESCAPE_CHARS.contains(&c) { '_' } else { c })
		.collect();

	Some(format!("{}{}", escaped, kind))
}

pub fn activity_class_name(url: &str) -> Option<String> {
	resolve_class_name(url, ComponentKind::Activity)
}

pub fn service_class_name(url: &str) -> Option<String> {
	resolve_class_name(url, ComponentKind::Service)
}

fn capitalize(input: &str) -> String {
	let mut chars = input.chars();
	match chars.next() {
		Some(_) if chars.as_str().is_empty() => input.to_uppercase(),
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

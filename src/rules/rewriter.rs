use regex::Captures;

/// Render a replacement template against the captures of a matched rule.
///
/// `$1`, `$2`, ... (or `${1}` where a digit would otherwise run into the
/// following text) expand to the corresponding capture groups; `$$` is a
/// literal `$`. A reference to a group that did not participate in the match
/// expands to the empty string; templates are not validated, that is the
/// rule author's responsibility.
pub fn render_template(caps: &Captures, template: &str) -> String {
	let mut rendered = String::with_capacity(template.len());
	caps.expand(template, &mut rendered);
	rendered
}

#[cfg(test)]
mod tests {
	use super::*;
	use regex::Regex;

	fn captures<'a>(pattern: &str, text: &'a str) -> Captures<'a> {
		Regex::new(pattern).unwrap().captures(text).unwrap()
	}

	#[test]
	fn test_render_single_group() {
		let caps = captures(r"(^| )(--)$", "a --");
		assert_eq!(render_template(&caps, "$1–"), " –");
	}

	#[test]
	fn test_render_multiple_groups() {
		let caps = captures(r#"(^|\s)(")([^"]*)(")$"#, r#"He said "hello""#);
		assert_eq!(render_template(&caps, "$1“$3”"), " “hello”");
	}

	#[test]
	fn test_render_missing_group_is_empty() {
		let caps = captures(r"(a)$", "a");
		assert_eq!(render_template(&caps, "$1$9"), "a");
	}

	#[test]
	fn test_render_escaped_dollar() {
		let caps = captures(r"(\d+)$", "price 42");
		assert_eq!(render_template(&caps, "$$$1"), "$42");
	}

	#[test]
	fn test_render_braced_group_reference() {
		let caps = captures(r"(\d)$", "version 2");
		assert_eq!(render_template(&caps, "${1}x"), "2x");
	}
}
